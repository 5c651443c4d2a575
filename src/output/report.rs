//! Text report of trusted CIDRs.

use super::terminal::format_field;
use crate::models::{Coordinate, EnrichedCidr};
use itertools::Itertools;

pub const CIDR_WIDTH: usize = 18;
pub const DESCRIPTION_WIDTH: usize = 20;
pub const LOCATION_WIDTH: usize = 50;
/// Between columns.
const SEPARATOR: &str = "\t ";

/// Sort entries by their geographic sort key, ascending.
pub fn sort_entries(entries: Vec<EnrichedCidr>) -> Vec<EnrichedCidr> {
    entries
        .into_iter()
        .sorted_by(|a, b| a.sort_key.cmp(&b.sort_key))
        .collect()
}

/// One report line: cidr, description, location, owner.
pub fn format_row(entry: &EnrichedCidr) -> String {
    [
        format_field(entry.cidr, CIDR_WIDTH),
        format_field(&entry.description, DESCRIPTION_WIDTH),
        format_field(&entry.location_name, LOCATION_WIDTH),
        entry.isp.clone(),
    ]
    .join(SEPARATOR)
}

/// Report lines in the order given.
pub fn render_report(entries: &[EnrichedCidr]) -> Vec<String> {
    entries.iter().map(format_row).collect()
}

/// Map positions in the order given; entries without a location are skipped.
pub fn coordinates(entries: &[EnrichedCidr]) -> Vec<Coordinate> {
    entries.iter().filter_map(|e| e.coordinate).collect()
}

/// Print the report to stdout.
pub fn print_report(entries: &[EnrichedCidr]) {
    log::info!("Printing {} trusted cidrs", entries.len());
    for line in render_report(entries) {
        println!("{line}");
    }
}
