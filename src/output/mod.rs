//! Output for the trusted CIDR summary.
//!
//! - [`report`] - Sorted fixed-width text report
//! - [`map`] - World map of CIDR locations
//! - [`terminal`] - Field formatting helpers

mod map;
mod report;
mod terminal;

pub use map::{MapSink, PngWorldMap};
pub use report::{
    coordinates, format_row, print_report, render_report, sort_entries, CIDR_WIDTH,
    DESCRIPTION_WIDTH, LOCATION_WIDTH,
};
pub use terminal::format_field;
