// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The recipe ranker: text filter, then mode selection.
//!
//! ```text
//! records ──▶ text filter ──▶ mode ──────────────────────────▶ ranked
//!             (title OR        all:      as-is
//!              publisher,     popular:  sort by score desc, take 10
//!              case-folded)   recent:   last 10, reversed
//!                             trending: sort by composite cmp, take 10
//! ```
//!
//! The output borrows from the input. Nothing is cloned, nothing is mutated,
//! so calling [`rank`] twice with the same arguments gives the same answer.
//! An empty result is a normal outcome, not an error, and no input makes
//! [`rank`] panic.

use tracing::debug;

use crate::config::RankerConfig;
use crate::contracts::{
    check_no_duplicates, check_popularity_sorted, check_selected_from, check_within_limit,
};
use crate::scoring::ranking::{compare_popularity, merge_sort_by, trending_cmp_weighted};
use crate::types::{FilterMode, Recipe};
use crate::utils::{contains_folded, fold_case};

/// Ranks recipes according to a [`RankerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Filter `records` by `query` and order them by `mode`.
    pub fn rank<'a>(&self, records: &'a [Recipe], query: &str, mode: FilterMode) -> Vec<&'a Recipe> {
        let needle = fold_case(query);
        let mut filtered: Vec<&Recipe> = records
            .iter()
            .filter(|r| matches_query(r, &needle))
            .collect();
        let matched = filtered.len();
        let limit = self.config.limit;

        let ranked = match mode {
            FilterMode::All => filtered,
            FilterMode::Popular => {
                merge_sort_by(&mut filtered, |a, b| compare_popularity(a, b));
                filtered.truncate(limit);
                check_popularity_sorted(&filtered);
                filtered
            }
            FilterMode::Recent => {
                let start = filtered.len().saturating_sub(limit);
                let mut newest = filtered.split_off(start);
                newest.reverse();
                newest
            }
            FilterMode::Trending => {
                let weights = self.config.trending;
                merge_sort_by(&mut filtered, |a, b| trending_cmp_weighted(a, b, &weights));
                filtered.truncate(limit);
                filtered
            }
        };

        check_selected_from(records, &ranked);
        check_no_duplicates(records, &ranked);
        if mode != FilterMode::All {
            check_within_limit(&ranked, limit);
        }

        debug!(
            mode = %mode,
            query,
            total = records.len(),
            matched,
            returned = ranked.len(),
            "ranked recipes"
        );
        ranked
    }
}

/// Rank with the default configuration.
///
/// # Example
///
/// ```
/// use recipe_ranker::{rank, FilterMode};
/// use recipe_ranker::testing::make_recipe;
///
/// let records = vec![make_recipe(1, "Tomato Soup", 10.0), make_recipe(2, "Bread", 90.0)];
/// let ranked = rank(&records, "", FilterMode::Popular);
/// assert_eq!(ranked[0].title, "Bread");
/// ```
pub fn rank<'a>(records: &'a [Recipe], query: &str, mode: FilterMode) -> Vec<&'a Recipe> {
    Ranker::default().rank(records, query, mode)
}

/// Does `recipe` pass the text filter? `folded_query` must already be
/// case-folded; an empty query matches everything.
pub fn matches_query(recipe: &Recipe, folded_query: &str) -> bool {
    contains_folded(&recipe.title, folded_query) || contains_folded(&recipe.publisher, folded_query)
}
