//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 range in CIDR notation,
//! with the containment and size checks used to classify trusted ranges.

use crate::errors::SgIpsError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask bits for a prefix length that is already known to be valid.
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len.min(MAX_LENGTH)))
        .unwrap_or(0)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use sg_ips_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SgIpsError> {
    if len > MAX_LENGTH {
        Err(SgIpsError::malformed(
            &format!("/{len}"),
            "Network length is too long",
        ))
    } else {
        Ok(mask_bits(len))
    }
}

/// IPv4 range in CIDR notation, e.g. `8.8.8.0/24`.
///
/// Immutable once parsed; the prefix length is always in `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "8.8.8.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SgIpsError> {
        let trimmed = addr_cidr.trim();
        let (addr, mask) = trimmed
            .split_once('/')
            .ok_or_else(|| SgIpsError::malformed(addr_cidr, "Invalid address/mask"))?;
        let addr = Ipv4Addr::from_str(addr)
            .map_err(|_| SgIpsError::malformed(addr_cidr, format!("Invalid address {addr}")))?;
        let mask = u8::from_str(mask)
            .map_err(|_| SgIpsError::malformed(addr_cidr, format!("Invalid subnet mask {mask}")))?;
        get_cidr_mask(mask)
            .map_err(|_| SgIpsError::malformed(addr_cidr, "Network length is too long"))?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the range.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the range.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !mask_bits(self.mask))
    }

    /// Number of addresses in the range.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// True when every address of `other` lies inside `self`.
    pub fn contains(&self, other: &Ipv4) -> bool {
        self.lo() <= other.lo() && other.hi() <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = SgIpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
