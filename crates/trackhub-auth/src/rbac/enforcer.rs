//! RBAC enforcement — role-hierarchy and project-scope checks.
//!
//! Every protected operation declares a minimum role; the hierarchy is the
//! strict total order Owner > Admin > Developer. Tenant scope is enforced
//! separately at the repository layer; this module covers the role ceiling
//! and project-permission membership.

use uuid::Uuid;

use trackhub_core::error::AppError;
use trackhub_entity::user::UserRole;

/// Enforces the role hierarchy and project-scope checks.
#[derive(Debug, Clone, Default)]
pub struct RoleEnforcer;

impl RoleEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the given role is at least the specified minimum role.
    ///
    /// Role hierarchy: Owner > Admin > Developer.
    pub fn require_minimum_role(
        &self,
        actual_role: &UserRole,
        minimum_role: &UserRole,
    ) -> Result<(), AppError> {
        if actual_role.has_at_least(minimum_role) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{actual_role}' is insufficient; minimum required: '{minimum_role}'"
            )))
        }
    }

    /// Checks whether a user may act on the named project.
    ///
    /// Owners pass implicitly; every other role needs explicit membership
    /// in its permission set.
    pub fn require_project_access(
        &self,
        role: &UserRole,
        project_permissions: &[Uuid],
        project_id: Uuid,
    ) -> Result<(), AppError> {
        if role.is_owner() || project_permissions.contains(&project_id) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "No permission for the requested project",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_role_hierarchy() {
        let enforcer = RoleEnforcer::new();
        assert!(
            enforcer
                .require_minimum_role(&UserRole::Owner, &UserRole::Admin)
                .is_ok()
        );
        assert!(
            enforcer
                .require_minimum_role(&UserRole::Admin, &UserRole::Admin)
                .is_ok()
        );
        assert!(
            enforcer
                .require_minimum_role(&UserRole::Developer, &UserRole::Admin)
                .is_err()
        );
        assert!(
            enforcer
                .require_minimum_role(&UserRole::Admin, &UserRole::Owner)
                .is_err()
        );
    }

    #[test]
    fn test_owner_bypasses_project_membership() {
        let enforcer = RoleEnforcer::new();
        let project = Uuid::new_v4();
        assert!(
            enforcer
                .require_project_access(&UserRole::Owner, &[], project)
                .is_ok()
        );
    }

    #[test]
    fn test_non_owner_needs_membership() {
        let enforcer = RoleEnforcer::new();
        let granted = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert!(
            enforcer
                .require_project_access(&UserRole::Developer, &[granted], granted)
                .is_ok()
        );
        assert!(
            enforcer
                .require_project_access(&UserRole::Developer, &[granted], other)
                .is_err()
        );
        assert!(
            enforcer
                .require_project_access(&UserRole::Admin, &[], other)
                .is_err()
        );
    }
}
