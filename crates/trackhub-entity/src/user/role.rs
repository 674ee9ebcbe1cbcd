//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available within a tenant.
///
/// Roles are strictly ordered by privilege level: Owner > Admin > Developer.
/// Exactly one owner is created per tenant at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Tenant owner. Implicitly holds every project permission.
    Owner,
    /// Can manage users, projects, and screens.
    Admin,
    /// Read access to the projects named in `project_permissions`.
    Developer,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Owner => 3,
            Self::Admin => 2,
            Self::Developer => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is the tenant owner.
    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Developer => "developer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = trackhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "developer" => Ok(Self::Developer),
            _ => Err(trackhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: owner, admin, developer"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::Owner.has_at_least(&UserRole::Admin));
        assert!(UserRole::Owner.has_at_least(&UserRole::Owner));
        assert!(UserRole::Admin.has_at_least(&UserRole::Developer));
        assert!(!UserRole::Developer.has_at_least(&UserRole::Admin));
        assert!(!UserRole::Admin.has_at_least(&UserRole::Owner));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("owner".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
