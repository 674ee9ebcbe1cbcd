//! Request context carrying the authenticated user and resolved permissions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trackhub_entity::user::{User, UserRole};

/// Context for the current authenticated dashboard request.
///
/// Built by the API layer after the bearer token has been validated and the
/// live user row re-read. Fields mirror the database row, not the token:
/// a role change or permission revocation takes effect on the next request
/// even while older tokens are still in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The tenant every operation in this request is scoped to.
    pub tenant_id: Uuid,
    /// The user's email.
    pub email: String,
    /// The user's current role.
    pub role: UserRole,
    /// Projects the user may act on. Owners implicitly hold all.
    pub project_permissions: Vec<Uuid>,
}

impl RequestContext {
    /// Returns whether the current user is the tenant owner.
    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }

    /// Returns whether the current user may act on the given project.
    pub fn can_access_project(&self, project_id: Uuid) -> bool {
        self.role.is_owner() || self.project_permissions.contains(&project_id)
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            tenant_id: user.tenant_id,
            email: user.email.clone(),
            role: user.role,
            project_permissions: user.project_permissions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: UserRole, projects: Vec<Uuid>) -> RequestContext {
        RequestContext {
            user_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            email: "a@acme.io".to_string(),
            role,
            project_permissions: projects,
        }
    }

    #[test]
    fn test_owner_accesses_any_project() {
        assert!(ctx(UserRole::Owner, vec![]).can_access_project(Uuid::new_v4()));
    }

    #[test]
    fn test_developer_needs_membership() {
        let project = Uuid::new_v4();
        let context = ctx(UserRole::Developer, vec![project]);
        assert!(context.can_access_project(project));
        assert!(!context.can_access_project(Uuid::new_v4()));
    }
}
