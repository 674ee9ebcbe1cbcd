//! JWT claims structure embedded in every access token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trackhub_entity::user::UserRole;

/// JWT claims payload.
///
/// The claims are a snapshot taken at issuance. Resolution re-reads the
/// user registry, so a role change after issuance takes effect immediately;
/// the claims only bootstrap the lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// The user's tenant at issuance time.
    pub tenant_id: Uuid,
    /// Role at issuance time.
    pub role: UserRole,
    /// Project permissions at issuance time.
    pub projects: Vec<Uuid>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
