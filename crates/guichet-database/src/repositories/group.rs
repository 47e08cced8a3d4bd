//! Group and membership repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use guichet_auth::store::MembershipDirectory;
use guichet_core::error::{AppError, ErrorKind};
use guichet_core::result::AppResult;
use guichet_entity::membership::GroupMembership;

/// Repository for groups and the membership relation.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All memberships of a user, with the group's location joined in.
    ///
    /// No filtering here; the scope engine applies its predicates on top.
    pub async fn memberships_of(&self, user_id: i64) -> AppResult<Vec<GroupMembership>> {
        sqlx::query_as::<_, GroupMembership>(
            "SELECT gm.user_id, gm.group_id, g.name AS group_name, gm.is_admin,
                    g.location_id, l.name AS location_name
             FROM group_memberships gm
             JOIN groups g ON g.id = gm.group_id
             LEFT JOIN locations l ON l.id = g.location_id
             WHERE gm.user_id = $1
             ORDER BY g.name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load memberships", e))
    }
}

#[async_trait]
impl MembershipDirectory for GroupRepository {
    async fn memberships_of(&self, user_id: i64) -> AppResult<Vec<GroupMembership>> {
        GroupRepository::memberships_of(self, user_id).await
    }
}
