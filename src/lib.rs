//! Trusted CIDR summary.
//!
//! Finds every external IPv4 range that AWS security groups trust for
//! inbound traffic, looks up where each range is and who owns it, and
//! reports them grouped by location, with a world map of the origins.
//!
//! The pipeline runs strictly in order:
//! account data -> [`processing::extract`] -> [`processing::aggregate`]
//! -> [`processing::enrich`] -> [`output`].

pub mod aws;
pub mod config;
pub mod errors;
pub mod geoip;
pub mod models;
pub mod output;
pub mod processing;

use aws::{AccountDataCache, AwsCliSource, SecurityGroupSource};
use config::{Args, Config};
use errors::SgIpsError;
use geoip::{GeoIpDatabases, GeoLookup};
use models::{Account, Advisories, Coordinate, EnrichedCidr};
use output::{MapSink, PngWorldMap};
use processing::{collect_cidrs, enrich_cidrs, CidrMap};

/// Sorted report rows and the matching map positions.
#[derive(Debug, Default)]
pub struct TrustedCidrReport {
    pub entries: Vec<EnrichedCidr>,
    pub coordinates: Vec<Coordinate>,
}

impl TrustedCidrReport {
    pub fn lines(&self) -> Vec<String> {
        output::render_report(&self.entries)
    }
}

/// Enrich all aggregated CIDRs and sort them by location.
///
/// Either every CIDR is enriched or an error is returned; there is no partial report.
pub fn build_report<L: GeoLookup + ?Sized>(
    cidrs: &CidrMap,
    lookup: &L,
    advisories: &mut Advisories,
) -> Result<TrustedCidrReport, SgIpsError> {
    let entries = output::sort_entries(enrich_cidrs(cidrs, lookup, advisories)?);
    let coordinates = output::coordinates(&entries);
    Ok(TrustedCidrReport {
        entries,
        coordinates,
    })
}

/// Collect, aggregate, enrich and sort the trusted CIDRs of `accounts`.
pub fn sg_ips<S, L>(
    source: &S,
    lookup: &L,
    accounts: &[Account],
    advisories: &mut Advisories,
) -> Result<TrustedCidrReport, SgIpsError>
where
    S: SecurityGroupSource + ?Sized,
    L: GeoLookup + ?Sized,
{
    let cidrs = collect_cidrs(source, accounts, advisories)?;
    build_report(&cidrs, lookup, advisories)
}

/// Run the whole tool as configured on the command line.
pub fn run(args: &Args) -> Result<(), SgIpsError> {
    let config = Config::load(&args.config)?;
    let accounts = config.select_accounts(&args.accounts)?;
    let source = AwsCliSource::new(AccountDataCache::new(&args.account_data, args.offline));
    let mut advisories = Advisories::new();

    // Open the databases before any account is queried, close them once enriched.
    let geoip = GeoIpDatabases::open(&args.geoip_dir)?;
    let report = sg_ips(&source, &geoip, &accounts, &mut advisories);
    drop(geoip);
    let report = report?;

    output::print_report(&report.entries);

    if !args.no_map {
        PngWorldMap::new(&args.output).plot(&report.coordinates)?;
    }

    log::info!(
        "Reported {} cidrs, {} warnings",
        report.entries.len(),
        advisories.len()
    );
    Ok(())
}
