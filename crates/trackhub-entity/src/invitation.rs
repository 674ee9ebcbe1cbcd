//! Invitation entity model.
//!
//! An invitation scopes a yet-to-register user to a tenant, a role, and a
//! project subset. It is single-use: redemption must atomically flip `used`
//! so that two concurrent redemptions cannot both succeed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

/// A one-time invitation token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invitation {
    /// Opaque random token string (32 bytes of entropy, base64url).
    pub token: String,
    /// The email the invitation is addressed to.
    pub email: String,
    /// The issuing tenant.
    pub tenant_id: Uuid,
    /// The role granted on redemption.
    pub role: UserRole,
    /// Projects granted on redemption.
    pub project_ids: Vec<Uuid>,
    /// When the invitation expires.
    pub expires_at: DateTime<Utc>,
    /// Whether the invitation has been redeemed.
    pub used: bool,
    /// When the invitation was issued.
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Whether the invitation can still be redeemed at `now`.
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        !self.used && now < self.expires_at
    }
}

/// Data required to persist a new invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvitation {
    /// Generated opaque token.
    pub token: String,
    /// Target email.
    pub email: String,
    /// Issuing tenant.
    pub tenant_id: Uuid,
    /// Granted role.
    pub role: UserRole,
    /// Granted projects.
    pub project_ids: Vec<Uuid>,
    /// Expiry timestamp.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invitation(used: bool, expires_in: Duration) -> Invitation {
        let now = Utc::now();
        Invitation {
            token: "t".repeat(43),
            email: "b@acme.io".to_string(),
            tenant_id: Uuid::new_v4(),
            role: UserRole::Developer,
            project_ids: vec![],
            expires_at: now + expires_in,
            used,
            created_at: now,
        }
    }

    #[test]
    fn test_redeemable_window() {
        let now = Utc::now();
        assert!(invitation(false, Duration::days(7)).is_redeemable(now));
        assert!(!invitation(true, Duration::days(7)).is_redeemable(now));
        assert!(!invitation(false, Duration::seconds(-1)).is_redeemable(now));
    }
}
