//! Auth handlers — login, logout, me, standalone token verification.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use guichet_auth::session::SESSION_COOKIE;
use guichet_core::error::AppError;

use crate::dto::request::{LoginRequest, VerifyTokenRequest};
use crate::dto::response::{LoginResponse, MessageResponse, ProfileResponse, VerifyTokenResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Builds the session cookie: `HttpOnly; Path=/; SameSite=Lax`.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

/// POST /api/auth/login
///
/// Looks the user up by email and verifies the password hash before
/// issuing a token. Unknown email and wrong password are indistinguishable
/// to the caller.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::unauthenticated("Invalid credentials"))?;

    let matches = state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?;
    if !matches {
        return Err(AppError::unauthenticated("Invalid credentials").into());
    }

    let token = state
        .token_service
        .issue(user.id, &user.email_professional)?;

    tracing::info!(user_id = user.id, "User logged in");

    let jar = jar.add(session_cookie(token.clone()));
    Ok((
        jar,
        Json(LoginResponse {
            access_token: token,
            user: ProfileResponse::from(&user),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie (empty value, `Max-Age=0`). There is no
/// server-side state to invalidate.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let expired = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build();

    (
        jar.add(expired),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&user.0))
}

/// POST /api/auth/verify
///
/// Standalone verification of an explicit token. Always answers HTTP 200;
/// the outcome travels in the body.
pub async fn verify_token(
    State(state): State<AppState>,
    Json(req): Json<VerifyTokenRequest>,
) -> Json<VerifyTokenResponse> {
    match state.token_service.verify(&req.token) {
        Ok(_) => Json(VerifyTokenResponse {
            authenticated: true,
            error: None,
        }),
        Err(err) => Json(VerifyTokenResponse {
            authenticated: false,
            error: Some(err.message),
        }),
    }
}
