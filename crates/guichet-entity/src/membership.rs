//! Group membership projection used by the authorization engine.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the (user, group, is_admin) relation, joined with the group
/// name and the group's location when it has one.
///
/// At most one membership exists per (user, group) pair; `is_admin` is
/// membership-scoped, not user-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupMembership {
    /// The member's user ID.
    pub user_id: i64,
    /// The group's ID.
    pub group_id: i64,
    /// The group's full dotted name.
    pub group_name: String,
    /// Whether the user administers this group.
    pub is_admin: bool,
    /// The group's location ID, when the group has one.
    pub location_id: Option<i64>,
    /// The group's location name, when the group has one.
    pub location_name: Option<String>,
}
