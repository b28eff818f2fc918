//! Integration tests for coverage checking over string input
//!
//! Covers the grid shape, full and empty days, single gaps, invalid tokens,
//! duplicates and samples outside the target day.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use day_coverage_checker::*;

fn target_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    target_day().and_hms_opt(h, m, s).unwrap()
}

fn full_day_strings(date: NaiveDate) -> Vec<String> {
    canonical_sequence(date).iter().map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()).collect()
}

/// Canonical grid for several dates, including leap day and year boundaries
#[test]
fn test_canonical_sequence_shape() {
    let dates = [
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    ];

    for date in dates {
        let grid = canonical_sequence(date);
        assert_eq!(grid.len(), 8640);
        assert_eq!(grid[0], date.and_hms_opt(0, 0, 0).unwrap());
        assert!(grid.windows(2).all(|w| w[1] - w[0] == Duration::seconds(10)));
        assert!(grid.iter().all(|ts| ts.date() == date));
    }
}

/// A complete day in shuffled order matches
#[test]
fn test_complete_day_any_order() {
    let mut items = full_day_strings(target_day());
    items.reverse();
    items.swap(0, 4000);

    let report = check_coverage(&items, target_day());
    assert!(report.is_match);
    assert_eq!(report.missing_count, 0);
    assert!(report.missing_timestamps.is_empty());
    assert_eq!(report.invalid_count, 0);
    assert!(report.invalid_positions.is_empty());
}

/// Empty input misses every slot
#[test]
fn test_empty_input() {
    let items: Vec<&str> = Vec::new();
    let report = check_coverage(&items, target_day());

    assert!(!report.is_match);
    assert_eq!(report.missing_count, 8640);
    assert_eq!(report.missing_timestamps, canonical_sequence(target_day()));
    assert_eq!(report.invalid_count, 0);
}

/// Removing one sample reports exactly that slot
#[test]
fn test_single_missing_slot() {
    let mut items = full_day_strings(target_day());
    let removed = items.remove(4321);

    let report = check_coverage(&items, target_day());
    assert!(!report.is_match);
    assert_eq!(report.missing_count, 1);
    assert_eq!(report.missing_timestamps.len(), 1);
    assert_eq!(report.missing_timestamps[0].format("%Y-%m-%d %H:%M:%S").to_string(), removed);
    assert_eq!(report.invalid_count, 0);
}

/// Replacing a sample with garbage adds an invalid position and a gap
#[test]
fn test_replaced_with_invalid_token() {
    let mut items = full_day_strings(target_day());
    items[7] = "not-a-date".to_string();

    let report = check_coverage(&items, target_day());
    assert_eq!(report.invalid_count, 1);
    assert_eq!(report.invalid_positions, vec![7]);
    assert_eq!(report.missing_count, 1);
    assert_eq!(report.missing_timestamps, vec![at(0, 1, 10)]);
    assert!(!report.is_match);
}

/// A duplicate elsewhere fills the slot of the replaced sample
#[test]
fn test_invalid_token_with_duplicate_filling_slot() {
    let mut items = full_day_strings(target_day());
    let original = std::mem::replace(&mut items[7], "not-a-date".to_string());
    items.push(original);

    let report = check_coverage(&items, target_day());
    assert_eq!(report.invalid_positions, vec![7]);
    assert_eq!(report.missing_count, 0);
    assert!(!report.is_match);
}

/// Duplicates mark a slot present exactly once
#[test]
fn test_duplicates_do_not_skew_counts() {
    let mut items = full_day_strings(target_day());
    let duplicates: Vec<String> = items.iter().take(100).cloned().collect();
    items.extend(duplicates);
    items.extend(std::iter::repeat("2025-10-20 12:00:00".to_string()).take(50));

    let report = check_coverage(&items, target_day());
    assert!(report.is_match);
    assert_eq!(report.missing_count, 0);
    assert_eq!(report.covered_count(), SLOTS_PER_DAY);
}

/// Samples outside the day or between slots change nothing
#[test]
fn test_out_of_window_samples_are_ignored() {
    let mut items = full_day_strings(target_day());
    items.push("2025-10-19 23:59:50".to_string());
    items.push("2025-10-21 00:00:00".to_string());
    items.push("2025-10-20 00:00:05".to_string());
    items.push("2025-10-20 23:59:59".to_string());

    let report = check_coverage(&items, target_day());
    assert!(report.is_match);
    assert_eq!(report.missing_count, 0);
    assert_eq!(report.invalid_count, 0);
}

/// The worked example: one slot missing and one bad token appended
#[test]
fn test_worked_example() {
    let items: Vec<String> = full_day_strings(target_day())
        .into_iter()
        .filter(|s| s != "2025-10-20 00:00:30")
        .chain(std::iter::once("xyz".to_string()))
        .collect();
    assert_eq!(items.len(), 8640);

    let report = check_coverage(&items, target_day());
    assert_eq!(report.missing_count, 1);
    assert_eq!(report.missing_timestamps, vec![at(0, 0, 30)]);
    assert_eq!(report.invalid_count, 1);
    assert_eq!(report.invalid_positions, vec![8639]);
    assert!(!report.is_match);
}

/// The worked example with every sample present and the bad token at index 8640
#[test]
fn test_worked_example_bad_token_after_full_day() {
    let mut items = full_day_strings(target_day());
    items.retain(|s| s != "2025-10-20 00:00:30");
    items.insert(3, "2025-10-20 00:00:05".to_string());
    items.push("xyz".to_string());
    assert_eq!(items.len(), 8641);

    let report = check_coverage(&items, target_day());
    assert_eq!(report.missing_timestamps, vec![at(0, 0, 30)]);
    assert_eq!(report.invalid_positions, vec![8640]);
    assert!(!report.is_match);
}

/// A seconds field of 60 is an invalid entry, not a sample
#[test]
fn test_leap_second_token_is_invalid() {
    let mut items = full_day_strings(target_day());
    items.push("2025-10-20 12:34:60".to_string());

    let report = check_coverage(&items, target_day());
    assert_eq!(report.missing_count, 0);
    assert_eq!(report.invalid_positions, vec![8640]);
    assert!(!report.is_match);
}

/// Mixed layouts resolve to the same slots
#[test]
fn test_mixed_layouts() {
    let items = vec![
        "2025-10-20 00:00:00",
        "2025-10-20T00:00:10",
        "2025/10/20 00:00:20",
        "20251020 000030",
        "2025-10-20T00:00:40Z",
        "2025-10-20 00:01",
        "2025-10-20",
    ];

    let report = check_coverage(&items, target_day());
    assert_eq!(report.invalid_count, 0);
    assert_eq!(report.missing_count, 8640 - 6);
    assert_eq!(report.missing_timestamps[0], at(0, 0, 50));
}

/// Invalid positions come back in ascending order
#[test]
fn test_invalid_positions_ascending() {
    let items = vec!["", "2025-10-20 00:00:00", "  ", "2025-02-30 00:00:00", "2025-10-20 00:00:10", "??"];

    let report = check_coverage(&items, target_day());
    assert_eq!(report.invalid_positions, vec![0, 2, 3, 5]);
    assert_eq!(report.invalid_count, 4);
}

/// Missing ranges group contiguous gaps
#[test]
fn test_missing_ranges_for_hour_outage() {
    let items: Vec<String> = full_day_strings(target_day())
        .into_iter()
        .filter(|s| !s.starts_with("2025-10-20 03:"))
        .collect();

    let report = check_coverage(&items, target_day());
    let ranges = report.missing_ranges();
    assert_eq!(report.missing_count, 360);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, at(3, 0, 0));
    assert_eq!(ranges[0].end, at(3, 59, 50));
    assert_eq!(ranges[0].slots, 360);
}
