//! Group-hierarchy authorization.
//!
//! Given a dotted-path prefix naming a subtree of the group namespace,
//! computes the set of location names the user is entitled to within that
//! subtree. The prefix test is a literal string-prefix match on the full
//! dotted group name, not segment-aware; callers pass prefixes ending in
//! `.`.

use std::sync::Arc;

use guichet_core::error::AppError;
use guichet_core::result::AppResult;
use guichet_entity::membership::GroupMembership;

use crate::store::MembershipDirectory;

/// The admin-restricted subtree root. Requests whose prefix starts with
/// this literal consider only `is_admin` memberships. Changing the
/// restricted root is a code change, not data.
pub const RESTRICTED_ROOT: &str = "Gestion.Groupes.";

/// The support subtree root used by the support-membership gate.
pub const SUPPORT_ROOT: &str = "Support.";

/// Filters memberships down to the location names reachable under `prefix`.
///
/// Groups without a location contribute nothing. The result is sorted and
/// de-duplicated so it behaves as a deterministic set; empty is a valid,
/// non-error outcome.
pub fn scoped_locations(memberships: &[GroupMembership], prefix: &str) -> Vec<String> {
    let admin_only = prefix.starts_with(RESTRICTED_ROOT);

    let mut locations: Vec<String> = memberships
        .iter()
        .filter(|m| m.group_name.starts_with(prefix))
        .filter(|m| !admin_only || m.is_admin)
        .filter_map(|m| m.location_name.clone())
        .collect();

    locations.sort();
    locations.dedup();
    locations
}

/// Whether any membership falls under the support subtree.
pub fn has_support_membership(memberships: &[GroupMembership]) -> bool {
    memberships.iter().any(|m| m.group_name.starts_with(SUPPORT_ROOT))
}

/// Hierarchy authorization engine over the membership store.
///
/// Callers resolve the session first; the engine only ever runs against a
/// concrete user ID.
pub struct ScopeEngine {
    memberships: Arc<dyn MembershipDirectory>,
}

impl ScopeEngine {
    /// Creates a new engine over the given membership store.
    pub fn new(memberships: Arc<dyn MembershipDirectory>) -> Self {
        Self { memberships }
    }

    /// Location names the user may see or manage under `prefix`.
    pub async fn locations_for(&self, user_id: i64, prefix: &str) -> AppResult<Vec<String>> {
        let memberships = self.memberships.memberships_of(user_id).await?;
        Ok(scoped_locations(&memberships, prefix))
    }

    /// Binary gate for support-staff operations: succeeds only when the
    /// user holds at least one membership under `Support.`.
    ///
    /// The denial carries no detail about which rule failed.
    pub async fn require_support(&self, user_id: i64) -> AppResult<()> {
        let memberships = self.memberships.memberships_of(user_id).await?;
        if has_support_membership(&memberships) {
            Ok(())
        } else {
            Err(AppError::access_denied("Access denied"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use guichet_core::error::ErrorKind;

    fn membership(group_name: &str, is_admin: bool, location: Option<&str>) -> GroupMembership {
        GroupMembership {
            user_id: 1,
            group_id: 1,
            group_name: group_name.to_string(),
            is_admin,
            location_id: location.map(|_| 1),
            location_name: location.map(String::from),
        }
    }

    #[test]
    fn restricted_prefix_excludes_non_admin_memberships() {
        let memberships = vec![membership(
            "Gestion.Groupes.Informatique",
            false,
            Some("Liège"),
        )];
        assert!(scoped_locations(&memberships, "Gestion.Groupes.").is_empty());
    }

    #[test]
    fn restricted_prefix_includes_admin_memberships() {
        let memberships = vec![membership(
            "Gestion.Groupes.Informatique",
            true,
            Some("Liège"),
        )];
        assert_eq!(
            scoped_locations(&memberships, "Gestion.Groupes."),
            vec!["Liège"]
        );
    }

    #[test]
    fn ordinary_prefix_ignores_the_admin_flag() {
        let memberships = vec![membership("Support.Reseau", false, Some("Namur"))];
        assert_eq!(scoped_locations(&memberships, "Support."), vec!["Namur"]);
    }

    #[test]
    fn duplicate_locations_collapse_to_one() {
        let memberships = vec![
            membership("Support.Reseau", false, Some("Namur")),
            membership("Support.Helpdesk", false, Some("Namur")),
        ];
        assert_eq!(scoped_locations(&memberships, "Support."), vec!["Namur"]);
    }

    #[test]
    fn groups_without_a_location_contribute_nothing() {
        let memberships = vec![
            membership("Support.Reseau", true, None),
            membership("Support.Helpdesk", false, Some("Namur")),
        ];
        assert_eq!(scoped_locations(&memberships, "Support."), vec!["Namur"]);
    }

    #[test]
    fn prefix_match_is_literal_not_segment_aware() {
        let memberships = vec![membership("Gestion.Groupes.X", true, Some("Liège"))];
        // A prefix cutting a segment mid-word still matches.
        assert_eq!(
            scoped_locations(&memberships, "Gestion.Group"),
            vec!["Liège"]
        );
    }

    #[test]
    fn result_is_sorted_for_determinism() {
        let memberships = vec![
            membership("Support.Sud", false, Some("Namur")),
            membership("Support.Est", false, Some("Liège")),
            membership("Support.Centre", false, Some("Bruxelles")),
        ];
        assert_eq!(
            scoped_locations(&memberships, "Support."),
            vec!["Bruxelles", "Liège", "Namur"]
        );
    }

    struct FakeMemberships(Vec<GroupMembership>);

    #[async_trait]
    impl MembershipDirectory for FakeMemberships {
        async fn memberships_of(&self, _user_id: i64) -> AppResult<Vec<GroupMembership>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn support_gate_denies_management_only_users() {
        let engine = ScopeEngine::new(Arc::new(FakeMemberships(vec![membership(
            "Gestion.Groupes.X",
            true,
            Some("Liège"),
        )])));

        let err = engine.require_support(1).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
    }

    #[tokio::test]
    async fn support_gate_accepts_any_support_membership() {
        let engine = ScopeEngine::new(Arc::new(FakeMemberships(vec![
            membership("Gestion.Groupes.X", false, None),
            membership("Support.Reseau", false, None),
        ])));

        assert!(engine.require_support(1).await.is_ok());
    }

    #[tokio::test]
    async fn empty_scope_is_a_valid_outcome() {
        let engine = ScopeEngine::new(Arc::new(FakeMemberships(vec![])));
        let locations = engine.locations_for(1, "Support.").await.unwrap();
        assert!(locations.is_empty());
    }
}
