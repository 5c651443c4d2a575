//! Command line options, the accounts file and tuning constants.

use crate::errors::SgIpsError;
use crate::models::Account;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Pause after each live AWS CLI call.
pub const SLEEP_MSEC: u64 = 200;
/// CIDRs with more addresses than this get a warning.
pub const LARGE_CIDR_SIZE: u64 = 2048;
/// Cached account data older than this gets a warning.
pub const CACHE_MAX_AGE_DAYS: i64 = 7;
/// Largest AWS CLI response accepted.
pub const MAX_CLI_OUTPUT_BYTES: usize = 50_000_000;
/// Region whose directory holds the `describe-regions` output.
pub const DEFAULT_REGION: &str = "us-east-1";

pub const CITY_DB_FILE: &str = "GeoLite2-City.mmdb";
pub const ASN_DB_FILE: &str = "GeoLite2-ASN.mmdb";

/// Find all IPs that are given trusted access via Security Groups.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Accounts config file.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Comma separated account names or ids, or "all".
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub accounts: Vec<String>,

    /// Directory with collected account data (`<account>/<region>/<call>.json`).
    #[arg(long, default_value = "account-data")]
    pub account_data: PathBuf,

    /// Directory containing GeoLite2-City.mmdb and GeoLite2-ASN.mmdb.
    #[arg(long, default_value = "data")]
    pub geoip_dir: PathBuf,

    /// Where to save the map image.
    #[arg(long, default_value = "trusted_ips.png")]
    pub output: PathBuf,

    /// Only read cached account data, never call the aws CLI.
    #[arg(long)]
    pub offline: bool,

    /// Skip drawing the map.
    #[arg(long)]
    pub no_map: bool,
}

/// Accounts config, `{"accounts": [{"id": "...", "name": "..."}]}`.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, SgIpsError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SgIpsError::Config(format!("Cannot read {}: {e}", path.display())))?;
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            SgIpsError::Config(format!(
                "Error parsing {}: path={} error={}",
                path.display(),
                e.path(),
                e
            ))
        })
    }

    /// Pick the accounts named on the command line; "all" selects every account.
    pub fn select_accounts(&self, wanted: &[String]) -> Result<Vec<Account>, SgIpsError> {
        if self.accounts.is_empty() {
            return Err(SgIpsError::Config("No accounts in config".to_string()));
        }
        if wanted.is_empty() || wanted.iter().any(|w| w == "all") {
            return Ok(self.accounts.clone());
        }

        wanted
            .iter()
            .map(|w| {
                self.accounts
                    .iter()
                    .find(|a| a.matches(w.trim()))
                    .cloned()
                    .ok_or_else(|| SgIpsError::Config(format!("Unknown account: {w}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::load(Path::new("src/tests/test_data/config_test.json"))
            .expect("Error reading test config")
    }

    #[test]
    fn test_load_config() {
        let config = test_config();
        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.accounts[0], Account::new("123456789012", "prod"));
    }

    #[test]
    fn test_load_missing_config() {
        let err = Config::load(Path::new("src/tests/test_data/no_such_config.json")).unwrap_err();
        assert!(matches!(err, SgIpsError::Config(_)));
    }

    #[test]
    fn test_select_all() {
        let config = test_config();
        let all = config.select_accounts(&["all".to_string()]).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(config.select_accounts(&[]).unwrap().len(), 2);
    }

    #[test]
    fn test_select_by_name_or_id() {
        let config = test_config();
        let picked = config
            .select_accounts(&["dev".to_string(), "123456789012".to_string()])
            .unwrap();
        let names: Vec<&str> = picked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["dev", "prod"]);
    }

    #[test]
    fn test_select_unknown() {
        let config = test_config();
        let err = config.select_accounts(&["staging".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Config error: Unknown account: staging");
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["sg-ips-summary"]);
        assert_eq!(args.accounts, vec!["all"]);
        assert_eq!(args.output, PathBuf::from("trusted_ips.png"));
        assert!(!args.offline);

        let args = Args::parse_from(["sg-ips-summary", "--accounts", "prod,dev", "--offline"]);
        assert_eq!(args.accounts, vec!["prod", "dev"]);
        assert!(args.offline);
    }
}
