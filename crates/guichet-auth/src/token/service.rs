//! Signed, time-limited session token issuance and verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use guichet_core::config::auth::AuthConfig;
use guichet_core::error::AppError;

use super::claims::TokenClaims;

/// Fixed session token lifetime. Not configuration: the 1-hour lifetime is
/// part of the contract.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// The single message every verification failure maps to. Signature,
/// structure, and expiry failures must be observably identical to callers.
const INVALID_TOKEN: &str = "Invalid or expired session token";

/// Signs and verifies session tokens (HS256).
///
/// Purely computational: the only state is the key material derived from
/// the process-wide secret at construction.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Deliberate clock-skew window: a token whose `exp` passed within
        // the last 5 seconds still verifies, so the effective lifetime is
        // TOKEN_TTL_SECS plus at most this allowance.
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Issues a signed token for the given user, expiring in one hour.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Verifies a token string and returns its claims.
    ///
    /// Bad signature, malformed structure, and expiry all collapse to the
    /// same `Unauthenticated` error; no cryptographic detail crosses this
    /// boundary.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::unauthenticated(INVALID_TOKEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guichet_core::error::ErrorKind;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig {
            token_secret: secret.to_string(),
        })
    }

    #[test]
    fn issue_then_verify_round_trips_identity() {
        let svc = service("unit-test-secret");
        let token = svc.issue(42, "alice@example.org").unwrap();

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "alice@example.org");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_is_invalid() {
        let svc = service("unit-test-secret");
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: 42,
            email: "alice@example.org".to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        let err = svc.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let issuer = service("secret-a");
        let verifier = service("secret-b");

        let token = issuer.issue(7, "bob@example.org").unwrap();
        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn malformed_token_is_indistinguishable_from_bad_signature() {
        let svc = service("unit-test-secret");

        let garbage = svc.verify("not-a-token").unwrap_err();
        let forged = svc
            .verify(&service("other").issue(1, "x@example.org").unwrap())
            .unwrap_err();

        assert_eq!(garbage.kind, forged.kind);
        assert_eq!(garbage.message, forged.message);
    }
}
