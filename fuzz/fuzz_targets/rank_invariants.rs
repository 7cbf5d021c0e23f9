// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Builds small record sets with hostile titles and scores, then checks that
//! every mode selects from the input, respects the limit, and never repeats a
//! record.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_ranker::{fold_case, matches_query, rank, FilterMode, Recipe, RESULT_LIMIT};

#[derive(Debug, Clone)]
struct RankInput {
    records: Vec<Recipe>,
    query: String,
}

impl<'a> arbitrary::Arbitrary<'a> for RankInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=30)?;
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let title = match u.int_in_range(0..=3)? {
                0 => "Tomato Soup".to_string(),
                1 => "ÉCLAIR Français".to_string(),
                2 => String::new(),
                _ => u.arbitrary::<String>()?,
            };
            // Scores stay finite like parsed records
            let social_rank = f64::from(u.int_in_range(-1000i32..=1000)?) / 7.0;
            records.push(Recipe {
                id: u.int_in_range(0..=u64::from(u32::MAX))?,
                recipe_id: format!("r{}", i),
                title,
                publisher: u.arbitrary::<String>()?,
                social_rank,
                image_url: String::new(),
                source_url: String::new(),
                cooking_time: None,
            });
        }

        let query = match u.int_in_range(0..=3)? {
            0 => String::new(),
            1 => "tomato".to_string(),
            2 => "é".to_string(),
            _ => u.arbitrary::<String>()?,
        };

        Ok(RankInput { records, query })
    }
}

fuzz_target!(|input: RankInput| {
    let needle = fold_case(&input.query);
    let matched = input
        .records
        .iter()
        .filter(|r| matches_query(r, &needle))
        .count();

    for mode in FilterMode::ALL {
        let ranked = rank(&input.records, &input.query, mode);

        // INVARIANT 1: every result is one of the inputs and matches the query
        for r in &ranked {
            assert!(input.records.iter().any(|src| std::ptr::eq(src, *r)));
            assert!(matches_query(r, &needle));
        }

        // INVARIANT 2: limits hold
        let expected = match mode {
            FilterMode::All => matched,
            _ => matched.min(RESULT_LIMIT),
        };
        assert_eq!(ranked.len(), expected, "mode {} returned wrong count", mode);

        // INVARIANT 3: no record appears twice
        for (i, a) in ranked.iter().enumerate() {
            assert!(!ranked[i + 1..].iter().any(|b| std::ptr::eq(*a, *b)));
        }
    }
});
