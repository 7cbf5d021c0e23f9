// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranked output.
//!
//! Debug-mode assertions that the ranker only selects and reorders:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure** when a change to the ranking code breaks a guarantee
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Guarantee                                        |
//! |----------------------------|--------------------------------------------------|
//! | `check_selected_from`      | Every output record is borrowed from the input   |
//! | `check_no_duplicates`      | No input record appears twice in the output      |
//! | `check_within_limit`       | Capped modes return at most `limit` records      |
//! | `check_popularity_sorted`  | `popular` output is non-increasing in score      |
//!
//! # Usage
//!
//! ```ignore
//! use recipe_ranker::contracts::*;
//!
//! // In debug builds, this panics if a ranked record was fabricated
//! check_selected_from(records, &ranked);
//! ```

use crate::types::Recipe;

// ============================================================================
// SELECTION CONTRACTS
// ============================================================================

/// Position of `record` inside `records`, by address.
///
/// Identity is by address, not by value, so two equal records in the input are
/// still told apart. Constant time, so the checks below stay linear even when
/// `all` returns the whole feed.
fn index_in(records: &[Recipe], record: &Recipe) -> Option<usize> {
    let range = records.as_ptr_range();
    let ptr: *const Recipe = record;
    if !range.contains(&ptr) {
        return None;
    }
    Some((ptr as usize - range.start as usize) / std::mem::size_of::<Recipe>())
}

/// Check that every ranked record points into `records`.
///
/// # Panics (debug builds only)
/// Panics if any output record is not an element of `records`.
#[inline]
pub fn check_selected_from(records: &[Recipe], ranked: &[&Recipe]) {
    for (i, r) in ranked.iter().enumerate() {
        debug_assert!(
            index_in(records, r).is_some(),
            "Contract violation: ranked[{}] (id {}) is not an element of the input",
            i,
            r.id
        );
    }
}

/// Check that no input record appears twice.
///
/// # Panics (debug builds only)
/// Panics if two output positions borrow the same input record.
#[inline]
pub fn check_no_duplicates(records: &[Recipe], ranked: &[&Recipe]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut seen = vec![false; records.len()];
    for (i, r) in ranked.iter().enumerate() {
        let Some(idx) = index_in(records, r) else {
            continue;
        };
        debug_assert!(
            !seen[idx],
            "Contract violation: ranked[{}] repeats input record {} (id {})",
            i,
            idx,
            r.id
        );
        seen[idx] = true;
    }
}

// ============================================================================
// MODE CONTRACTS
// ============================================================================

/// Check the result cap.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_within_limit(ranked: &[&Recipe], limit: usize) {
    debug_assert!(
        ranked.len() <= limit,
        "Contract violation: {} records returned, limit is {}",
        ranked.len(),
        limit
    );
}

/// Check that scores never increase down the list.
///
/// # Panics (debug builds only)
/// Panics if `ranked[i].social_rank < ranked[i + 1].social_rank`.
#[inline]
pub fn check_popularity_sorted(ranked: &[&Recipe]) {
    for pair in ranked.windows(2) {
        debug_assert!(
            pair[0].social_rank >= pair[1].social_rank,
            "Contract violation: popular order broken, {} (id {}) before {} (id {})",
            pair[0].social_rank,
            pair[0].id,
            pair[1].social_rank,
            pair[1].id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_recipe;

    #[test]
    fn test_check_selected_from_accepts_borrowed_records() {
        let records = vec![make_recipe(1, "A", 1.0), make_recipe(2, "B", 2.0)];
        let ranked: Vec<&Recipe> = records.iter().rev().collect();

        // Should not panic
        check_selected_from(&records, &ranked);
        check_no_duplicates(&records, &ranked);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_check_selected_from_rejects_copies() {
        let records = vec![make_recipe(1, "A", 1.0)];
        let copy = records[0].clone();
        check_selected_from(&records, &[&copy]);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_check_no_duplicates_rejects_repeats() {
        let records = vec![make_recipe(1, "A", 1.0)];
        check_no_duplicates(&records, &[&records[0], &records[0]]);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn test_check_popularity_sorted_rejects_ascending() {
        let records = vec![make_recipe(1, "A", 1.0), make_recipe(2, "B", 2.0)];
        check_popularity_sorted(&[&records[0], &records[1]]);
    }

    #[test]
    fn test_check_within_limit() {
        let records = vec![make_recipe(1, "A", 1.0)];
        check_within_limit(&[&records[0]], 10);
    }

    #[test]
    fn test_checks_scale_to_whole_feed() {
        let records: Vec<Recipe> = (0..20_000).map(|i| make_recipe(i, "A", 1.0)).collect();
        let ranked: Vec<&Recipe> = records.iter().collect();
        check_selected_from(&records, &ranked);
        check_no_duplicates(&records, &ranked);
    }

    #[test]
    fn test_index_in_tells_equal_records_apart() {
        let records = vec![make_recipe(1, "A", 1.0), make_recipe(1, "A", 1.0)];
        assert_eq!(index_in(&records, &records[1]), Some(1));
        assert_eq!(index_in(&records, &records[0].clone()), None);
    }
}
