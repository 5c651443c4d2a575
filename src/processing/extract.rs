//! Rule extraction.
//!
//! Walks every account and region, pulling trusted source CIDRs out of the
//! security group ingress rules.

use super::aggregate::CidrMap;
use super::classify::{is_external, is_unneeded, is_unrestricted};
use crate::aws::SecurityGroupSource;
use crate::errors::SgIpsError;
use crate::models::{Account, Advisories, Advisory, Ipv4, SecurityGroup};

/// Pull `(cidr, description)` pairs worth reporting out of a region's groups.
///
/// Private ranges and `0.0.0.0/0` are dropped silently; reserved ranges raise
/// an advisory and are dropped. A malformed CIDR aborts.
pub fn extract_cidrs<'a>(
    groups: &'a [SecurityGroup],
    advisories: &mut Advisories,
) -> Result<Vec<(Ipv4, Option<&'a str>)>, SgIpsError> {
    let mut pairs = Vec::new();
    for group in groups {
        for range in group.ingress_ranges() {
            let cidr = Ipv4::new(&range.cidr_ip)?;
            if !is_external(&cidr) {
                continue;
            }
            if is_unneeded(&cidr) {
                advisories.raise(Advisory::UnneededCidr(cidr));
                continue;
            }
            if is_unrestricted(&cidr) {
                continue;
            }
            log::trace!("{} trusts {cidr}", group.group_id);
            pairs.push((cidr, range.description.as_deref()));
        }
    }
    Ok(pairs)
}

/// Add the trusted CIDRs of every region of one account to `cidrs`.
pub fn get_cidrs_for_account<S: SecurityGroupSource + ?Sized>(
    source: &S,
    account: &Account,
    cidrs: &mut CidrMap,
    advisories: &mut Advisories,
) -> Result<(), SgIpsError> {
    for region in source.regions(account)? {
        let groups = source.security_groups(account, &region)?;
        let pairs = extract_cidrs(&groups, advisories)?;
        log::debug!(
            "{}/{region}: {} groups, {} trusted cidrs",
            account.name,
            groups.len(),
            pairs.len()
        );
        for (cidr, description) in pairs {
            cidrs.add(cidr, description);
        }
    }
    Ok(())
}

/// Aggregate the trusted CIDRs of all accounts.
pub fn collect_cidrs<S: SecurityGroupSource + ?Sized>(
    source: &S,
    accounts: &[Account],
    advisories: &mut Advisories,
) -> Result<CidrMap, SgIpsError> {
    let mut cidrs = CidrMap::new();
    for account in accounts {
        log::info!("Collecting trusted cidrs for account {} ({})", account.name, account.id);
        get_cidrs_for_account(source, account, &mut cidrs, advisories)?;
    }
    log::info!("Found {} distinct trusted cidrs", cidrs.len());
    Ok(cidrs)
}
