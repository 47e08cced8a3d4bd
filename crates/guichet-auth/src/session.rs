//! Session identity resolution.
//!
//! Resolves the current authenticated user from the value of the session
//! cookie. The cookie value is an explicit parameter so that resolution is
//! testable with synthetic inputs; the HTTP layer reads the jar.

use std::sync::Arc;

use guichet_core::error::AppError;
use guichet_core::result::AppResult;
use guichet_entity::user::User;

use crate::store::UserDirectory;
use crate::token::TokenService;

/// Name of the HTTP-only session cookie carrying the signed token.
pub const SESSION_COOKIE: &str = "accessToken";

/// The single message all unauthenticated outcomes share. Missing cookie,
/// invalid token, and vanished user must be indistinguishable to callers.
const UNAUTHENTICATED: &str = "Authentication required";

/// Resolves a session cookie value into the current authenticated user.
pub struct SessionResolver {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserDirectory>,
}

impl SessionResolver {
    /// Creates a new resolver over the given token service and user store.
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserDirectory>) -> Self {
        Self { tokens, users }
    }

    /// Resolves the current user from an optional cookie value.
    ///
    /// Three distinct causes, one observable outcome:
    /// - no cookie → `Unauthenticated`, without touching the token service
    /// - invalid/expired token → `Unauthenticated`
    /// - valid token whose user no longer exists → `Unauthenticated`
    ///
    /// Performs at most one credential-store read and never mutates state,
    /// so it is safe to call repeatedly within a request.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> AppResult<User> {
        let token = match cookie_value {
            Some(token) => token,
            None => return Err(AppError::unauthenticated(UNAUTHENTICATED)),
        };

        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| AppError::unauthenticated(UNAUTHENTICATED))?;

        // Token validity does not imply user existence; the user may have
        // been deleted after issuance.
        match self.users.find_by_id(claims.user_id()).await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!(user_id = claims.user_id(), "Valid token for unknown user");
                Err(AppError::unauthenticated(UNAUTHENTICATED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use guichet_core::config::auth::AuthConfig;
    use guichet_core::error::ErrorKind;

    struct FakeUsers {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserDirectory for FakeUsers {
        async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .iter()
                .find(|u| u.email_professional.eq_ignore_ascii_case(email))
                .cloned())
        }
    }

    fn user(id: i64, email: &str) -> User {
        User {
            id,
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            email_professional: email.to_string(),
            password_hash: String::new(),
            is_admin: false,
            must_change_password: false,
            location_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn resolver(users: Vec<User>) -> (SessionResolver, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(&AuthConfig {
            token_secret: "resolver-test-secret".to_string(),
        }));
        let resolver = SessionResolver::new(
            Arc::clone(&tokens),
            Arc::new(FakeUsers { users }),
        );
        (resolver, tokens)
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthenticated() {
        let (resolver, _) = resolver(vec![user(1, "a@example.org")]);
        let err = resolver.resolve(None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn invalid_token_is_unauthenticated() {
        let (resolver, _) = resolver(vec![user(1, "a@example.org")]);
        let err = resolver.resolve(Some("garbage")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn valid_token_for_deleted_user_is_unauthenticated() {
        let (resolver, tokens) = resolver(vec![user(1, "a@example.org")]);
        let token = tokens.issue(999, "gone@example.org").unwrap();
        let err = resolver.resolve(Some(&token)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn all_causes_share_one_observable_outcome() {
        let (resolver, tokens) = resolver(vec![user(1, "a@example.org")]);
        let orphan = tokens.issue(999, "gone@example.org").unwrap();

        let missing = resolver.resolve(None).await.unwrap_err();
        let invalid = resolver.resolve(Some("garbage")).await.unwrap_err();
        let deleted = resolver.resolve(Some(&orphan)).await.unwrap_err();

        assert_eq!(missing.kind, invalid.kind);
        assert_eq!(missing.message, invalid.message);
        assert_eq!(invalid.message, deleted.message);
    }

    #[tokio::test]
    async fn valid_token_resolves_the_user() {
        let (resolver, tokens) = resolver(vec![user(1, "a@example.org")]);
        let token = tokens.issue(1, "a@example.org").unwrap();
        let resolved = resolver.resolve(Some(&token)).await.unwrap();
        assert_eq!(resolved.id, 1);
        assert_eq!(resolved.email_professional, "a@example.org");
    }

    #[tokio::test]
    async fn issued_token_resolves_until_expiry() {
        use crate::token::{TOKEN_TTL_SECS, TokenClaims};

        let (resolver, tokens) = resolver(vec![user(1, "a@example.org")]);

        let fresh = tokens.issue(1, "a@example.org").unwrap();
        let resolved = resolver.resolve(Some(&fresh)).await.unwrap();
        assert_eq!(resolved.id, 1);
        assert_eq!(resolved.email_professional, "a@example.org");

        // Same identity, same secret, but expired an hour ago.
        let now = Utc::now().timestamp();
        let stale_claims = TokenClaims {
            sub: 1,
            email: "a@example.org".to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let stale = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &stale_claims,
            &jsonwebtoken::EncodingKey::from_secret(b"resolver-test-secret"),
        )
        .unwrap();

        let err = resolver.resolve(Some(&stale)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let (resolver, tokens) = resolver(vec![user(1, "a@example.org")]);
        let token = tokens.issue(1, "a@example.org").unwrap();

        let first = resolver.resolve(Some(&token)).await.unwrap();
        let second = resolver.resolve(Some(&token)).await.unwrap();
        assert_eq!(first.id, second.id);
    }
}
