//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Recipe;

/// Create a test recipe with a title, score and default everything else.
///
/// This is the canonical implementation used across all tests.
pub fn make_recipe(id: u64, title: &str, social_rank: f64) -> Recipe {
    Recipe {
        id,
        recipe_id: format!("r{}", id),
        title: title.to_string(),
        publisher: format!("Publisher {}", id),
        social_rank,
        image_url: format!("https://img.example/{}.jpg", id),
        source_url: format!("https://recipes.example/{}", id),
        cooking_time: None,
    }
}

/// Create a test recipe with an explicit publisher.
pub fn make_recipe_with_publisher(id: u64, title: &str, publisher: &str) -> Recipe {
    Recipe {
        publisher: publisher.to_string(),
        ..make_recipe(id, title, 0.0)
    }
}

/// `count` recipes with ids `1..=count` and `social_rank` taken from `scores`
/// cyclically (or the id itself when `scores` is empty).
pub fn make_recipes(count: u64, scores: &[f64]) -> Vec<Recipe> {
    (1..=count)
        .map(|id| {
            let score = if scores.is_empty() {
                id as f64
            } else {
                scores[(id as usize - 1) % scores.len()]
            };
            make_recipe(id, &format!("Recipe {}", id), score)
        })
        .collect()
}

/// Ids of a ranked result, for compact assertions.
pub fn ids(ranked: &[&Recipe]) -> Vec<u64> {
    ranked.iter().map(|r| r.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_recipe() {
        let recipe = make_recipe(42, "Test Title", 12.5);
        assert_eq!(recipe.id, 42);
        assert_eq!(recipe.recipe_id, "r42");
        assert_eq!(recipe.title, "Test Title");
        assert_eq!(recipe.publisher, "Publisher 42");
    }

    #[test]
    fn test_make_recipes_cycles_scores() {
        let recipes = make_recipes(5, &[1.0, 2.0]);
        let scores: Vec<f64> = recipes.iter().map(|r| r.social_rank).collect();
        assert_eq!(scores, vec![1.0, 2.0, 1.0, 2.0, 1.0]);
    }
}
