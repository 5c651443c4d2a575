//! Trusted CIDR processing logic.
//!
//! This module contains the pipeline stages, leaf first:
//! - [`classify`] - Which ranges are external, reserved or unrestricted
//! - [`extract`] - Pulling source CIDRs out of security group rules
//! - [`aggregate`] - De-duplication of CIDRs across accounts and regions
//! - [`enrich`] - Location and network-owner lookup per CIDR

pub mod aggregate;
pub mod classify;
pub mod enrich;
pub mod extract;

// Re-export public functions
pub use aggregate::CidrMap;
pub use classify::{
    is_external, is_external_cidr, is_unneeded, is_unneeded_cidr, is_unrestricted,
    UNRESTRICTED_CIDR,
};
pub use enrich::{enrich_cidr, enrich_cidrs};
pub use extract::{collect_cidrs, extract_cidrs, get_cidrs_for_account};
