//! User self-service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use guichet_core::error::AppError;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// PUT /api/users/me/password
///
/// Re-verifies the current password before storing a fresh hash; clears
/// the must-change-password flag.
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let matches = state
        .password_hasher
        .verify_password(&req.current_password, &user.password_hash)?;
    if !matches {
        return Err(AppError::access_denied("Current password is incorrect").into());
    }

    let new_hash = state.password_hasher.hash_password(&req.new_password)?;
    state.user_repo.update_password(user.id, &new_hash).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(Json(MessageResponse {
        message: "Password updated".to_string(),
    }))
}
