//! Error types for the trusted CIDR pipeline.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting, enriching or reporting CIDRs.
#[derive(Debug, Error)]
pub enum SgIpsError {
    /// A CIDR string could not be parsed.
    #[error("Invalid CIDR '{cidr}': {reason}")]
    MalformedCidr { cidr: String, reason: String },

    /// The address has no record in a geoip database.
    #[error("Address {ip} not found in {database} database")]
    LookupNotFound { ip: Ipv4Addr, database: &'static str },

    /// A geoip database could not be opened.
    #[error("GeoIP database {path} unavailable: {reason}")]
    LookupUnavailable { path: PathBuf, reason: String },

    /// A geoip database could be opened but the lookup itself failed.
    #[error("GeoIP lookup failed for {ip}: {reason}")]
    LookupFailed { ip: Ipv4Addr, reason: String },

    #[error("Account data error for {account}/{region}: {reason}")]
    AccountData {
        account: String,
        region: String,
        reason: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Map render failed: {0}")]
    Render(String),
}

impl SgIpsError {
    pub(crate) fn malformed(cidr: &str, reason: impl Into<String>) -> Self {
        SgIpsError::MalformedCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }
}
