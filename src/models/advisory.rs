//! Advisory conditions: worth a warning, never worth stopping the run.

use super::Ipv4;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A reserved, test, multicast or broadcast range was trusted.
    UnneededCidr(Ipv4),
    /// The range is big enough to be a doubtful "trusted" source.
    LargeCidr { cidr: Ipv4, size: u64 },
    /// The ASN database has no owner for the range.
    UnknownOwner(Ipv4),
    /// The city database has no record for the range.
    UnknownLocation(Ipv4),
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::UnneededCidr(cidr) => write!(f, "Unneeded cidr used {cidr}"),
            Advisory::LargeCidr { cidr, size } => {
                write!(f, "Large CIDR {cidr} contains {size} IPs in it")
            }
            Advisory::UnknownOwner(cidr) => write!(f, "Unknown CIDR {cidr}"),
            Advisory::UnknownLocation(cidr) => write!(f, "No location found for CIDR {cidr}"),
        }
    }
}

/// Collects advisories in the order they are raised, logging each one.
#[derive(Debug, Default)]
pub struct Advisories {
    raised: Vec<Advisory>,
}

impl Advisories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, advisory: Advisory) {
        log::warn!("{advisory}");
        self.raised.push(advisory);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        self.raised.iter()
    }

    pub fn len(&self) -> usize {
        self.raised.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raised.is_empty()
    }
}
