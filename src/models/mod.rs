//! Domain models for the trusted CIDR summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 range with CIDR notation support
//! - [`SecurityGroup`] and friends - EC2 records as returned by the AWS CLI
//! - [`Account`] - an account from the config file
//! - [`EnrichedCidr`] - a report row
//! - [`Advisory`] - non-fatal warnings raised along the pipeline

mod account;
mod advisory;
mod cidr;
mod ipv4;
mod security_group;

// Re-export public types
pub use account::Account;
pub use advisory::{Advisories, Advisory};
pub use cidr::{Coordinate, EnrichedCidr};
pub use ipv4::{get_cidr_mask, Ipv4, MAX_LENGTH};
pub use security_group::{
    DescribeRegions, DescribeSecurityGroups, IpPermission, IpRange, Region, SecurityGroup,
};
