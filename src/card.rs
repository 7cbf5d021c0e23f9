// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display projection of ranked recipes.
//!
//! The presentation layer draws cards; this module decides what goes on them.
//! An empty ranking is its own variant, [`Listing::Empty`], so a caller cannot
//! forget to show "No recipes found" and render a blank grid instead.

use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// Message shown for an empty listing.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found";

/// Which front end the detail links point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Static pages over the mock API: `recipe-detail.html?id={recipe_id}`.
    #[default]
    Static,
    /// Server-rendered routes: `/recipe/{id}`.
    Server,
}

impl LinkStyle {
    pub fn detail_href(self, recipe: &Recipe) -> String {
        match self {
            LinkStyle::Static => format!("recipe-detail.html?id={}", recipe.recipe_id),
            LinkStyle::Server => format!("/recipe/{}", recipe.id),
        }
    }
}

impl std::str::FromStr for LinkStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(LinkStyle::Static),
            "server" => Ok(LinkStyle::Server),
            other => Err(format!("unknown link style '{}' (expected static or server)", other)),
        }
    }
}

/// Everything a recipe card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    /// `social_rank` rounded for the star badge.
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    pub detail_href: String,
}

impl RecipeCard {
    pub fn new(recipe: &Recipe, links: LinkStyle) -> Self {
        RecipeCard {
            recipe_id: recipe.recipe_id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image_url: recipe.image_url.clone(),
            source_url: recipe.source_url.clone(),
            rating: round_half_up(recipe.social_rank),
            cooking_time: recipe.cooking_time,
            detail_href: links.detail_href(recipe),
        }
    }
}

/// What to render for one ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty,
    Cards(Vec<RecipeCard>),
}

impl Listing {
    pub fn from_ranked(ranked: &[&Recipe], links: LinkStyle) -> Self {
        if ranked.is_empty() {
            return Listing::Empty;
        }
        Listing::Cards(ranked.iter().map(|r| RecipeCard::new(r, links)).collect())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Cards in display order; empty for [`Listing::Empty`].
    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            Listing::Empty => &[],
            Listing::Cards(cards) => cards,
        }
    }
}

/// Round half toward positive infinity: 2.5 → 3, -2.5 → -2.
///
/// `f64::round` goes away from zero instead, which disagrees on negative halves.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
