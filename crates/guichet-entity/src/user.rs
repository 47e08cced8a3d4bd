//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A provisioned user of the helpdesk.
///
/// Owned by the credential store; this core only ever reads it, except for
/// the password-change mutation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Professional email address (unique, used for login).
    pub email_professional: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Global admin flag (distinct from per-group admin membership).
    pub is_admin: bool,
    /// Whether the user must change their password at next login.
    pub must_change_password: bool,
    /// Home location, when assigned.
    pub location_id: Option<i64>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
