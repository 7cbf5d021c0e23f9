// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning fetched JSON into validated [`Recipe`] values.
//!
//! Both recipe APIs feed through here. The mock API returns flat records with
//! string ids and a string publisher; the server API nests the publisher as
//! `{"publisher_name": ...}` and adds `cooking_time`. Either shape loads.
//!
//! # Validation rules
//!
//! | Field         | Missing / null        | Wrong type                  |
//! |---------------|-----------------------|-----------------------------|
//! | text fields   | `""`                  | numbers stringified, else `""` |
//! | `id`          | error                 | error unless numeric string |
//! | `social_rank` | error                 | error unless numeric string |
//! | `recipe_id`   | `id.to_string()`      | numbers stringified         |
//! | `cooking_time`| `None`                | `None`                      |
//!
//! Text is lenient because a missing title only makes a card look empty. Numbers
//! are strict because coercing them would reorder results without anyone
//! noticing.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::RankError;
use crate::types::Recipe;

impl Recipe {
    /// Validate one raw record. `index` is its position in the payload and is
    /// only used for error reporting.
    pub fn from_value(index: usize, value: &Value) -> Result<Recipe, RankError> {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);

        let id = parse_id(index, obj.get("id"))?;
        let social_rank = parse_score(index, obj.get("social_rank"))?;
        let recipe_id = match obj.get("recipe_id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => id.to_string(),
        };

        Ok(Recipe {
            id,
            recipe_id,
            title: text_field(obj, "title"),
            publisher: publisher_name(obj.get("publisher")),
            social_rank,
            image_url: text_field(obj, "image_url"),
            source_url: text_field(obj, "source_url"),
            cooking_time: obj
                .get("cooking_time")
                .and_then(Value::as_u64)
                .and_then(|minutes| u32::try_from(minutes).ok()),
        })
    }
}

/// Parse and validate a recipe payload.
///
/// A top-level value that is not an array is treated as "no recipes", matching
/// what the mock API client does with unexpected bodies. The first invalid
/// record aborts the load.
pub fn load_records(json: &str) -> Result<Vec<Recipe>, RankError> {
    let payload: Value = serde_json::from_str(json)?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            warn!(
                kind = value_kind(&other),
                "recipe payload is not an array; treating as empty"
            );
            return Ok(Vec::new());
        }
    };

    let recipes = items
        .iter()
        .enumerate()
        .map(|(index, item)| Recipe::from_value(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = recipes.len(), "loaded recipe payload");
    Ok(recipes)
}

/// Look up a recipe for the detail view.
pub fn find_by_recipe_id<'a>(records: &'a [Recipe], recipe_id: &str) -> Result<&'a Recipe, RankError> {
    records
        .iter()
        .find(|r| r.recipe_id == recipe_id)
        .ok_or_else(|| RankError::RecipeNotFound(recipe_id.to_string()))
}

fn parse_id(index: usize, value: Option<&Value>) -> Result<u64, RankError> {
    match value {
        None | Some(Value::Null) => Err(RankError::invalid_field(index, "id", "missing")),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(id) => Ok(id),
            None => id_from_float(index, n.as_f64(), &n.to_string()),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(id) => Ok(id),
                Err(_) => id_from_float(index, s.parse::<f64>().ok(), &format!("{:?}", s)),
            }
        }
        Some(other) => Err(RankError::invalid_field(
            index,
            "id",
            format!("expected a number, got {}", value_kind(other)),
        )),
    }
}

/// Integral floats such as 3.0 (or "3.0") are fine; 3.5, -1 and 2^64 are not.
fn id_from_float(index: usize, value: Option<f64>, shown: &str) -> Result<u64, RankError> {
    match value {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(RankError::invalid_field(
            index,
            "id",
            format!("expected a non-negative integer, got {}", shown),
        )),
    }
}

fn parse_score(index: usize, value: Option<&Value>) -> Result<f64, RankError> {
    let score = match value {
        None | Some(Value::Null) => {
            return Err(RankError::invalid_field(index, "social_rank", "missing"))
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(other) => {
            return Err(RankError::invalid_field(
                index,
                "social_rank",
                format!("expected a number, got {}", value_kind(other)),
            ))
        }
    };

    match score {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(RankError::invalid_field(
            index,
            "social_rank",
            format!("expected a finite number, got {}", value.map_or_else(String::new, Value::to_string)),
        )),
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    text_of(obj.get(key))
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// The mock API sends a plain string; the server API sends the publisher row.
fn publisher_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(publisher)) => text_of(publisher.get("publisher_name")),
        other => text_of(other),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
