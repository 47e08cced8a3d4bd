//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// `token_secret` carries no serde default on purpose: an absent signing
/// secret must abort startup rather than surface per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    pub token_secret: String,
}

impl AuthConfig {
    /// Reject configurations whose secret is present but unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.token_secret must not be empty",
            ));
        }
        Ok(())
    }
}
