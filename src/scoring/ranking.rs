// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparators used to order filtered recipes, and the sort that applies them.
//!
//! Ordering is stable: records that compare equal keep their source order.
//! That matters for `popular`, where ties on `social_rank` are common in real
//! payloads.
//!
//! # Trending is a comparator, not a score
//!
//! [`trending_cmp`] looks at two recipes and asks which one is ahead by a
//! weighted delta. It does not assign each recipe a number first, so orderings
//! match the browser client exactly. The delta negates exactly when its
//! arguments swap, but floating-point rounding makes it intransitive on
//! near-ties: `a < b`, `b < c` and `c < a` can all hold at the `1e-13` scale.
//! `slice::sort_by` is allowed to panic on such a comparator, so ranking goes
//! through [`merge_sort_by`], which accepts any comparator and always returns
//! a permutation of its input.

use std::cmp::Ordering;

use super::core::{trending_delta, TrendingWeights};
use crate::types::Recipe;

/// Higher `social_rank` first.
///
/// ```ignore
/// merge_sort_by(&mut ranked, |a, b| compare_popularity(a, b));
/// ```
pub fn compare_popularity(a: &Recipe, b: &Recipe) -> Ordering {
    // -0.0 and 0.0 compare equal here, as they do in the browser
    b.social_rank
        .partial_cmp(&a.social_rank)
        .unwrap_or(Ordering::Equal)
}

/// Trending order with the default 0.7 / 0.3 weights.
pub fn trending_cmp(a: &Recipe, b: &Recipe) -> Ordering {
    trending_cmp_weighted(a, b, &TrendingWeights::default())
}

/// Trending order with explicit weights.
///
/// Negative delta puts `a` first, positive puts `b` first, zero keeps source
/// order.
pub fn trending_cmp_weighted(a: &Recipe, b: &Recipe, weights: &TrendingWeights) -> Ordering {
    trending_delta(a, b, weights)
        .partial_cmp(&0.0)
        .unwrap_or(Ordering::Equal)
}

/// Stable bottom-up merge sort.
///
/// Never panics, whatever `cmp` returns. For a total order the result equals
/// `sort_by`; for an inconsistent one it is some permutation of `items`,
/// like the browser's `Array.prototype.sort`.
pub fn merge_sort_by<T: Copy>(items: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buf = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(&items[start..mid], &items[mid..end], &mut buf[start..end], &mut cmp);
            start = end;
        }
        items.copy_from_slice(&buf);
        width *= 2;
    }
}

/// Merge two adjacent runs into `out`. Left wins ties.
fn merge_runs<T: Copy>(
    left: &[T],
    right: &[T],
    out: &mut [T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left =
            i < left.len() && (j >= right.len() || cmp(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
