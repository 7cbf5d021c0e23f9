// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ordering: how filtered recipes get sorted.
//!
//! `popular` is a plain descending sort on `social_rank`. `trending` uses a
//! weighted pairwise comparator over popularity and id deltas. Both share the
//! same result cap.

mod core;
pub mod ranking;

pub use core::*;
