//! Report records built from aggregated CIDRs.

use super::Ipv4;

/// A map position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// One distinct trusted CIDR with its geo and owner metadata.
///
/// Built once after aggregation, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCidr {
    pub cidr: Ipv4,
    /// Rule descriptions joined with `|`, ASCII only.
    pub description: String,
    /// "City, State, Country" or "Unknown".
    pub location_name: String,
    /// Network owner from the ASN database, or "Unknown".
    pub isp: String,
    /// `country-state-city-cidr`, used to group rows geographically.
    pub sort_key: String,
    /// None when the city database had no location for the range.
    pub coordinate: Option<Coordinate>,
}
