// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: recipes and filter modes.
//!
//! A [`Recipe`] only exists in validated form. Text fields that were missing
//! from the payload are already empty strings; numeric fields are already
//! checked to be real numbers. Everything downstream (ranking, cards) can
//! therefore be infallible. See [`crate::record`] for the validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RankError;

/// One recipe as fetched from the recipe API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Numeric identifier. Increases with insertion, so it doubles as recency.
    pub id: u64,
    /// Key used by the detail view. Falls back to `id` when the payload has none.
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    /// Popularity score. Unbounded but always finite; only relative order matters.
    pub social_rank: f64,
    pub image_url: String,
    pub source_url: String,
    /// Minutes. Only the server-backed API reports it.
    pub cooking_time: Option<u32>,
}

/// Named display ordering strategy, selected by a filter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Source order, no truncation.
    #[default]
    All,
    /// Highest `social_rank` first.
    Popular,
    /// Most recently added first.
    Recent,
    /// Weighted popularity and recency.
    Trending,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Popular,
        FilterMode::Recent,
        FilterMode::Trending,
    ];

    /// Parse the visible label of a filter tag ("Popular", " trending ").
    pub fn parse_tag(label: &str) -> Result<Self, RankError> {
        match label.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "popular" => Ok(FilterMode::Popular),
            "recent" => Ok(FilterMode::Recent),
            "trending" => Ok(FilterMode::Trending),
            _ => Err(RankError::UnknownFilterMode(label.trim().to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Popular => "popular",
            FilterMode::Recent => "recent",
            FilterMode::Trending => "trending",
        }
    }
}

impl FromStr for FilterMode {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::parse_tag(s)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
