//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Format a value as a left-aligned field of at least `width` characters.
///
/// Longer values are never truncated.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}
