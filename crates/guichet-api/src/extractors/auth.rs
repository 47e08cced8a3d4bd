//! `CurrentUser` extractor — reads the session cookie, verifies the token,
//! and loads the authenticated user.
//!
//! This is the strict tier of the two-tier check: unlike the navigation
//! gate, it actually verifies the token and confirms the user exists.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use guichet_auth::session::SESSION_COOKIE;
use guichet_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).map(|c| c.value());

        let user = state.session_resolver.resolve(token).await?;
        Ok(CurrentUser(user))
    }
}
