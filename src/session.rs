// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Who is logged in.
//!
//! A [`Session`] is an ordinary value owned by the application context and
//! handed to whatever needs it. There is no process-wide "current user" to
//! look up. Checking credentials is someone else's job: the session asks an
//! [`Authenticator`] and records the [`User`] it returns. Passwords pass
//! through [`Credentials`] and [`ProfileUpdate`] on their way to that
//! collaborator and are never stored here.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::error::SessionError;

/// Shortest new password the profile form accepts.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Avatar used when the account has none.
pub const DEFAULT_PROFILE_IMAGE: &str = "../assets/default-profile.png";

/// The logged-in user as the front end sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub profile_image: String,
}

impl User {
    /// Build a user from an account record, filling display defaults.
    ///
    /// A missing name falls back to the part of the email before `@`.
    pub fn from_account(
        id: impl Into<String>,
        email: impl Into<String>,
        name: Option<String>,
        profile_image: Option<String>,
    ) -> Self {
        let email = email.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email_local_part(&email).to_string());
        User {
            id: id.into(),
            name,
            username: None,
            profile_image: profile_image
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
            email,
        }
    }
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Trims the email; rejects an empty email or password.
    pub fn new(email: &str, password: &str) -> Result<Self, SessionError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The identity collaborator: the mock user API, a server login endpoint,
/// or a test double.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, SessionError>;
}

/// Profile form input. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

impl ProfileUpdate {
    /// Check the form before anything is applied.
    ///
    /// Password rules, in order: current password present, new matches its
    /// confirmation, new is at least [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<(), SessionError> {
        if let Some(email) = &self.email {
            let email = email.trim();
            let (local, domain) = email.split_once('@').unwrap_or(("", ""));
            if local.is_empty() || domain.is_empty() {
                return Err(SessionError::InvalidEmail(email.to_string()));
            }
        }

        let current = self.current_password.as_deref().unwrap_or("");
        let new = self.new_password.as_deref().unwrap_or("");
        let confirm = self.confirm_password.as_deref().unwrap_or("");

        // Filling in any password field means a password change
        if [current, new, confirm].iter().any(|f| !f.is_empty()) {
            if current.is_empty() {
                return Err(SessionError::MissingCurrentPassword);
            }
            if new != confirm {
                return Err(SessionError::PasswordMismatch);
            }
            if new.chars().count() < MIN_PASSWORD_LEN {
                return Err(SessionError::PasswordTooShort);
            }
        }
        Ok(())
    }

    /// True when the form asks for a password change.
    pub fn changes_password(&self) -> bool {
        self.new_password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Holder of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate and, on success, replace the current user.
    ///
    /// On failure the session is left exactly as it was.
    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<&User, SessionError> {
        let user = authenticator.authenticate(credentials)?;
        info!(user_id = %user.id, "logged in");
        Ok(self.user.insert(user))
    }

    /// Clear the session, returning whoever was logged in.
    pub fn logout(&mut self) -> Option<User> {
        let previous = self.user.take();
        if let Some(user) = &previous {
            info!(user_id = %user.id, "logged out");
        }
        previous
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Guard for pages that need a login.
    pub fn require_user(&self) -> Result<&User, SessionError> {
        self.user.as_ref().ok_or(SessionError::NotAuthenticated)
    }

    /// Apply a profile form to the current user.
    ///
    /// Validation happens first; a rejected form changes nothing. The password
    /// fields are only checked for consistency here; forwarding them is the
    /// caller's concern.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<&User, SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotAuthenticated)?;
        update.validate()?;

        if let Some(name) = &update.name {
            user.name = name.trim().to_string();
        }
        if let Some(username) = &update.username {
            user.username = Some(username.trim().to_string());
        }
        if let Some(email) = &update.email {
            user.email = email.trim().to_string();
        }

        debug!(
            user_id = %user.id,
            password_change = update.changes_password(),
            "profile updated"
        );
        Ok(user)
    }
}
