// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranker configuration.
//!
//! Every field has a default, so an empty object (or no file at all) gives the
//! stock behavior: ten results, 0.7 / 0.3 trending weights, static-site links.
//!
//! ```json
//! {
//!   "limit": 10,
//!   "trending": { "popularity": 0.7, "recency": 0.3 },
//!   "linkStyle": "static"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::card::LinkStyle;
use crate::error::RankError;
use crate::scoring::{TrendingWeights, RESULT_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Cap for popular, recent and trending.
    pub limit: usize,
    pub trending: TrendingWeights,
    /// How card detail links are built.
    pub link_style: LinkStyle,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            limit: RESULT_LIMIT,
            trending: TrendingWeights::default(),
            link_style: LinkStyle::default(),
        }
    }
}

impl RankerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let config: RankerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        if self.limit == 0 {
            return Err(RankError::InvalidConfig("limit must be at least 1".into()));
        }
        if !self.trending.popularity.is_finite() || !self.trending.recency.is_finite() {
            return Err(RankError::InvalidConfig(
                "trending weights must be finite numbers".into(),
            ));
        }
        Ok(())
    }
}
