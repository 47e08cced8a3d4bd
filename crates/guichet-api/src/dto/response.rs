//! Response DTOs.

use serde::{Deserialize, Serialize};

use guichet_entity::user::User;

/// User profile as exposed by the "who am I" and login operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// User ID.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Professional email.
    pub email_professional: String,
    /// Global admin flag.
    pub is_admin: bool,
    /// Whether a password change is required.
    pub must_change_password: bool,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_professional: user.email_professional.clone(),
            is_admin: user.is_admin,
            must_change_password: user.must_change_password,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The signed session token (also set as the session cookie).
    pub access_token: String,
    /// The authenticated user's profile.
    pub user: ProfileResponse,
}

/// Standalone token verification response. Always HTTP 200; the outcome is
/// carried in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    /// Whether the token verified.
    pub authenticated: bool,
    /// Present when `authenticated` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Group-scope query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopedLocationsResponse {
    /// Location names the caller may reach under the requested prefix,
    /// sorted and de-duplicated. Empty is a valid outcome.
    pub locations: Vec<String>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
