//! Gap and invalid-entry detection
//!
//! Both passes work on the resolved input, a `Vec<Option<NaiveDateTime>>`
//! aligned with the original positions.

use chrono::NaiveDateTime;
use std::collections::HashSet;
use tracing::debug;

/// Positions (ascending) whose item could not be resolved to a timestamp
pub fn collect_invalid_positions(resolved: &[Option<NaiveDateTime>]) -> Vec<usize> {
    resolved
        .iter()
        .enumerate()
        .filter_map(|(position, item)| item.is_none().then_some(position))
        .collect()
}

/// Deduplicated set of every successfully resolved timestamp
pub fn present_timestamps(resolved: &[Option<NaiveDateTime>]) -> HashSet<NaiveDateTime> {
    resolved.iter().flatten().copied().collect()
}

/// Canonical slots with no matching timestamp, in canonical order
///
/// Timestamps in `present` that are not canonical slots are ignored.
pub fn find_missing(
    canonical: &[NaiveDateTime],
    present: &HashSet<NaiveDateTime>,
) -> Vec<NaiveDateTime> {
    let missing: Vec<_> =
        canonical.iter().filter(|slot| !present.contains(*slot)).copied().collect();

    debug!(
        "Gap scan: {} slots, {} distinct timestamps, {} missing",
        canonical.len(),
        present.len(),
        missing.len()
    );
    missing
}
