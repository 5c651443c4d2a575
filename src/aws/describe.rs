//! EC2 describe calls backed by the account data cache.

use super::cache::AccountDataCache;
use super::{cli, SecurityGroupSource};
use crate::config;
use crate::errors::SgIpsError;
use crate::models::{Account, DescribeRegions, DescribeSecurityGroups, SecurityGroup};
use serde::de::DeserializeOwned;
use std::error::Error;

const DESCRIBE_REGIONS: &str = "ec2-describe-regions";
const DESCRIBE_SECURITY_GROUPS: &str = "ec2-describe-security-groups";

/// Reads security groups from collected account data, calling the AWS CLI
/// for anything not collected yet.
#[derive(Debug, Clone)]
pub struct AwsCliSource {
    cache: AccountDataCache,
}

impl AwsCliSource {
    pub fn new(cache: AccountDataCache) -> Self {
        AwsCliSource { cache }
    }

    fn query<T: DeserializeOwned>(
        &self,
        account: &Account,
        region: &str,
        call: &str,
    ) -> Result<T, SgIpsError> {
        let to_error = |reason: String| SgIpsError::AccountData {
            account: account.name.clone(),
            region: region.to_string(),
            reason,
        };

        let json = self
            .cache
            .read_or_fetch(&account.name, region, call, || {
                cli::run(&cli::aws_command(call, &account.name, region))
            })
            .map_err(|e| to_error(e.to_string()))?;

        parse_json(&json, call).map_err(|e| to_error(e.to_string()))
    }
}

/// Parse a JSON document, reporting the path of the first bad field.
fn parse_json<T: DeserializeOwned>(json: &str, call: &str) -> Result<T, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("Bad {call} JSON at path={}", e.path());
        format!("Error parsing {call} JSON: path={} error={}", e.path(), e).into()
    })
}

impl SecurityGroupSource for AwsCliSource {
    fn regions(&self, account: &Account) -> Result<Vec<String>, SgIpsError> {
        let described: DescribeRegions =
            self.query(account, config::DEFAULT_REGION, DESCRIBE_REGIONS)?;
        let regions: Vec<String> = described
            .regions
            .into_iter()
            .filter(|r| r.is_enabled())
            .map(|r| r.region_name)
            .collect();
        log::info!("Account {} has {} enabled regions", account.name, regions.len());
        Ok(regions)
    }

    fn security_groups(
        &self,
        account: &Account,
        region: &str,
    ) -> Result<Vec<SecurityGroup>, SgIpsError> {
        let described: DescribeSecurityGroups =
            self.query(account, region, DESCRIBE_SECURITY_GROUPS)?;
        log::debug!(
            "{}/{region}: {} security groups",
            account.name,
            described.security_groups.len()
        );
        Ok(described.security_groups)
    }
}
