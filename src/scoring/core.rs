// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind the `popular` and `trending` orderings.
//!
//! Trending blends two signals: how much more popular one recipe is than
//! another, and how much newer it is. Neither is normalized. A recipe that is
//! 10 points more popular and 30 ids older comes out exactly even:
//!
//! ```text
//! 0.7 * 10 + 0.3 * (-30) = 7 - 9 = -2   → the newer one wins
//! ```
//!
//! # Constants
//!
//! | Constant            | Value | Meaning                                 |
//! |---------------------|-------|-----------------------------------------|
//! | `RESULT_LIMIT`      | 10    | Cap for popular, recent and trending    |
//! | `POPULARITY_WEIGHT` | 0.7   | Weight of the `social_rank` delta       |
//! | `RECENCY_WEIGHT`    | 0.3   | Weight of the id delta                  |

use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// Maximum number of records returned by every mode except `all`.
pub const RESULT_LIMIT: usize = 10;

/// Weight applied to the popularity delta in trending.
pub const POPULARITY_WEIGHT: f64 = 0.7;

/// Weight applied to the id (recency) delta in trending.
pub const RECENCY_WEIGHT: f64 = 0.3;

/// Weights for the trending comparator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingWeights {
    pub popularity: f64,
    pub recency: f64,
}

impl Default for TrendingWeights {
    fn default() -> Self {
        Self {
            popularity: POPULARITY_WEIGHT,
            recency: RECENCY_WEIGHT,
        }
    }
}

/// Weighted delta of `b` over `a`. Negative means `a` trends higher.
///
/// Deltas are taken pairwise, inside the comparison, rather than from a
/// per-record score. Ids are subtracted as floats so large ids behave the same
/// as in the browser client.
pub fn trending_delta(a: &Recipe, b: &Recipe, weights: &TrendingWeights) -> f64 {
    let rank_score = (b.social_rank - a.social_rank) * weights.popularity;
    let recent_score = (b.id as f64 - a.id as f64) * weights.recency;
    rank_score + recent_score
}
