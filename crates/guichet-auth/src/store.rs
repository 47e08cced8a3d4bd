//! Data-access traits over the credential store.
//!
//! The authorization core only ever reads; writes (provisioning, deletion)
//! belong to external collaborators. The database crate provides the
//! production implementations; tests substitute in-memory fakes.

use async_trait::async_trait;

use guichet_core::result::AppResult;
use guichet_entity::membership::GroupMembership;
use guichet_entity::user::User;

/// Read access to user identity records.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by professional email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Read access to a user's group memberships.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// All memberships of the given user, with the group's location joined
    /// in when present. No filtering; callers apply predicates.
    async fn memberships_of(&self, user_id: i64) -> AppResult<Vec<GroupMembership>>;
}
