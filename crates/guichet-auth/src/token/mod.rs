//! Session token creation and verification.

pub mod claims;
pub mod service;

pub use claims::TokenClaims;
pub use service::{TOKEN_TTL_SECS, TokenService};
