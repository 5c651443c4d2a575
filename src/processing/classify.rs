//! CIDR classification.
//!
//! Decides which source ranges are external and which are not worth trusting.

use crate::errors::SgIpsError;
use crate::models::Ipv4;
use lazy_static::lazy_static;

/// The range that allows everyone.
pub const UNRESTRICTED_CIDR: &str = "0.0.0.0/0";

fn parse_table(cidrs: &[&str]) -> Vec<Ipv4> {
    cidrs
        .iter()
        .map(|c| Ipv4::new(c).expect("Invalid built-in CIDR"))
        .collect()
}

lazy_static! {
    /// RFC 1918 private ranges.
    static ref PRIVATE_RANGES: Vec<Ipv4> =
        parse_table(&["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]);

    static ref UNNEEDED_RANGES: Vec<Ipv4> = parse_table(&[
        "169.254.0.0/16",     // link local
        "127.0.0.0/8",        // loopback
        "192.0.2.0/24",       // RFC 5737 test networks
        "198.51.100.0/24",
        "203.0.113.0/24",
        "224.0.0.0/4",        // class D multicast
        "240.0.0.0/5",        // class E reserved
        "248.0.0.0/5",        // reserved
        "255.255.255.255/32", // broadcast
    ]);
}

/// True unless the range sits entirely inside a private network.
pub fn is_external(range: &Ipv4) -> bool {
    !PRIVATE_RANGES.iter().any(|private| private.contains(range))
}

/// True if the range sits entirely inside a link-local, loopback, test,
/// multicast, reserved or broadcast range.
pub fn is_unneeded(range: &Ipv4) -> bool {
    UNNEEDED_RANGES.iter().any(|reserved| reserved.contains(range))
}

pub fn is_unrestricted(range: &Ipv4) -> bool {
    range.to_string() == UNRESTRICTED_CIDR
}

/// String form of [`is_external`].
pub fn is_external_cidr(cidr: &str) -> Result<bool, SgIpsError> {
    Ok(is_external(&Ipv4::new(cidr)?))
}

/// String form of [`is_unneeded`].
pub fn is_unneeded_cidr(cidr: &str) -> Result<bool, SgIpsError> {
    Ok(is_unneeded(&Ipv4::new(cidr)?))
}
