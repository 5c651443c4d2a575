//! Geolocation and network-owner lookups.
//!
//! - [`GeoLookup`] - the lookup service the enrichment stage talks to
//! - [`GeoIpDatabases`] - MaxMind GeoLite2 City and ASN databases

mod maxmind;

use crate::errors::SgIpsError;
use std::net::Ipv4Addr;

pub use maxmind::{install_instructions, GeoIpDatabases};

/// City database answer. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityInfo {
    pub city: Option<String>,
    /// Most specific subdivision (state or province).
    pub subdivision: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// ASN database answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsnInfo {
    pub organization: Option<String>,
    pub number: Option<u32>,
}

/// Lookup service keyed by IP address.
///
/// Both calls fail with [`SgIpsError::LookupNotFound`] for an address with no
/// record; any other error means the service itself is broken.
pub trait GeoLookup {
    fn city(&self, ip: Ipv4Addr) -> Result<CityInfo, SgIpsError>;
    fn asn(&self, ip: Ipv4Addr) -> Result<AsnInfo, SgIpsError>;
}
