// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for record loading, ranking configuration and sessions.
//!
//! Two families, because they fail for different reasons and surface in
//! different places:
//!
//! - [`RankError`]: the payload or configuration is wrong. A record whose
//!   `social_rank` is `"lots"` would silently corrupt ordering if coerced to
//!   zero, so it is rejected here with the record index and field name.
//! - [`SessionError`]: the user did something the session cannot accept
//!   (empty login form, mismatched passwords, not logged in).
//!
//! An empty ranking result is never an error. See [`crate::Listing::Empty`].

use thiserror::Error;

/// Failure while loading records, looking them up, or reading configuration.
#[derive(Debug, Error)]
pub enum RankError {
    /// A numeric field was missing, non-numeric, or out of range.
    #[error("record {index}: invalid `{field}`: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// The payload was not valid JSON.
    #[error("malformed recipe payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a payload or config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Detail lookup found no record with this `recipe_id`.
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// A filter-tag label that is not one of all/popular/recent/trending.
    #[error("unknown filter mode '{0}' (expected all, popular, recent or trending)")]
    UnknownFilterMode(String),

    /// A configuration value outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RankError {
    pub(crate) fn invalid_field(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        RankError::InvalidField {
            index,
            field,
            reason: reason.into(),
        }
    }
}

/// Failure of a session operation.
///
/// Messages are the ones shown to the user by the login and profile forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("Please enter your current password")]
    MissingCurrentPassword,

    #[error("New password must be at least 4 characters")]
    PasswordTooShort,

    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_names_record_and_field() {
        let err = RankError::invalid_field(3, "social_rank", "expected a number, got \"lots\"");
        assert_eq!(
            err.to_string(),
            "record 3: invalid `social_rank`: expected a number, got \"lots\""
        );
    }

    #[test]
    fn session_errors_use_form_messages() {
        assert_eq!(
            SessionError::MissingCredentials.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            SessionError::PasswordMismatch.to_string(),
            "New passwords do not match"
        );
        assert_eq!(
            SessionError::PasswordTooShort.to_string(),
            "New password must be at least 4 characters"
        );
    }
}
