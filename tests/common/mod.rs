//! Shared test utilities and fixtures.

#![allow(dead_code)]

use recipe_ranker::{load_records, Recipe};
use std::fs;

// Re-export canonical test utilities from recipe_ranker::testing
pub use recipe_ranker::testing::{ids, make_recipe, make_recipes};

// ============================================================================
// FIXTURE PATHS
// ============================================================================

/// Twelve records in the mock API shape (string ids, string publisher).
pub const MOCK_FIXTURE: &str = "fixtures/recipes.json";

/// Three records in the server API shape (nested publisher, cooking_time).
pub const SERVER_FIXTURE: &str = "fixtures/server_recipes.json";

// ============================================================================
// LOADERS
// ============================================================================

pub fn load_fixture(path: &str) -> Vec<Recipe> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    load_records(&content).unwrap_or_else(|e| panic!("Invalid fixture {}: {}", path, e))
}

pub fn load_mock_fixture() -> Vec<Recipe> {
    load_fixture(MOCK_FIXTURE)
}

pub fn load_server_fixture() -> Vec<Recipe> {
    load_fixture(SERVER_FIXTURE)
}
