//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user within a tenant.
///
/// `tenant_id` is immutable after creation. `email` is unique across the
/// whole system, not just within the tenant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// Email address, unique system-wide.
    pub email: String,
    /// Human-readable display name.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role within the tenant.
    pub role: UserRole,
    /// Projects this user may act on. Ignored for owners, who implicitly
    /// hold every project permission.
    pub project_permissions: Vec<Uuid>,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user may act on the given project.
    ///
    /// Owners pass implicitly; everyone else needs explicit membership.
    pub fn can_access_project(&self, project_id: Uuid) -> bool {
        self.role.is_owner() || self.project_permissions.contains(&project_id)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Granted project permissions.
    pub project_permissions: Vec<Uuid>,
}
