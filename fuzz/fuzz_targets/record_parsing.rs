// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for payload parsing.
//!
//! Arbitrary bytes go through `load_records`. Whatever comes back must either
//! be a clean error or a set of records the ranker can handle without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_ranker::{load_records, rank, FilterMode, LinkStyle, Listing};

fuzz_target!(|data: &[u8]| {
    let payload = String::from_utf8_lossy(data);

    // INVARIANT 1: parsing never panics
    let Ok(records) = load_records(&payload) else {
        return;
    };

    // INVARIANT 2: every parsed score is finite
    for record in &records {
        assert!(
            record.social_rank.is_finite(),
            "record {} parsed a non-finite score",
            record.id
        );
    }

    // INVARIANT 3: parsed records rank and render in every mode
    for mode in FilterMode::ALL {
        let ranked = rank(&records, "", mode);
        let _ = Listing::from_ranked(&ranked, LinkStyle::Static);
    }
});
