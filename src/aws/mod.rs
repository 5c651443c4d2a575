//! AWS account data.
//!
//! This module supplies the raw security group records:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`cache`] - Collected account data on disk
//! - [`describe`] - EC2 describe calls on top of the cache

mod cache;
mod cli;
mod describe;

use crate::errors::SgIpsError;
use crate::models::{Account, SecurityGroup};

// Re-export public types and functions
pub use cache::AccountDataCache;
pub use cli::{aws_command, run};
pub use describe::AwsCliSource;

/// Where security groups come from, one account and region at a time.
pub trait SecurityGroupSource {
    /// Regions to visit for the account.
    fn regions(&self, account: &Account) -> Result<Vec<String>, SgIpsError>;

    /// All security groups of the account in one region.
    fn security_groups(
        &self,
        account: &Account,
        region: &str,
    ) -> Result<Vec<SecurityGroup>, SgIpsError>;
}
