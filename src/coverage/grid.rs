//! Canonical sampling grid
//!
//! This module builds the fixed 10-second grid that a single calendar day is
//! expected to be sampled on.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Spacing between two consecutive grid slots, in seconds
pub const SAMPLING_INTERVAL_SECS: i64 = 10;

/// Number of seconds in one calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of grid slots covering one calendar day (86400 / 10)
pub const SLOTS_PER_DAY: usize = (SECONDS_PER_DAY / SAMPLING_INTERVAL_SECS) as usize;

/// Midnight at the start of `date`
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Build the canonical sequence for `date`
///
/// The sequence starts at 00:00:00, advances by [`SAMPLING_INTERVAL_SECS`] and
/// stops at the last slot strictly before the following midnight, so it always
/// holds [`SLOTS_PER_DAY`] ascending timestamps.
pub fn canonical_sequence(date: NaiveDate) -> Vec<NaiveDateTime> {
    let start = day_start(date);
    (0..SLOTS_PER_DAY as i64)
        .map(|slot| start + Duration::seconds(slot * SAMPLING_INTERVAL_SECS))
        .collect()
}

/// Grid slot that `timestamp` occupies on `date`, if any
///
/// Returns `None` for timestamps on another day and for timestamps that fall
/// between two slots (including any sub-second component).
pub fn slot_index(date: NaiveDate, timestamp: NaiveDateTime) -> Option<usize> {
    if timestamp.date() != date || timestamp.nanosecond() != 0 {
        return None;
    }

    let secs = i64::from(timestamp.num_seconds_from_midnight());
    if secs % SAMPLING_INTERVAL_SECS != 0 {
        return None;
    }

    Some((secs / SAMPLING_INTERVAL_SECS) as usize)
}
