//! # guichet-auth
//!
//! Authentication and group-scoped authorization for the Guichet helpdesk.
//!
//! ## Modules
//!
//! - `token` — signed, time-limited session token creation and verification
//! - `session` — resolving the current user from a session cookie value
//! - `scope` — group-hierarchy authorization and the support-membership gate
//! - `password` — Argon2id password hashing and verification
//! - `store` — data-access traits over the credential store

pub mod password;
pub mod scope;
pub mod session;
pub mod store;
pub mod token;

pub use password::PasswordHasher;
pub use scope::{RESTRICTED_ROOT, SUPPORT_ROOT, ScopeEngine};
pub use session::{SESSION_COOKIE, SessionResolver};
pub use store::{MembershipDirectory, UserDirectory};
pub use token::{TokenClaims, TokenService};
