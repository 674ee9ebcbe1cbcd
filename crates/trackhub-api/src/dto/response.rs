//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trackhub_entity::invitation::Invitation;
use trackhub_entity::tenant::Tenant;
use trackhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Tenant ID.
    pub tenant_id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Role.
    pub role: String,
    /// Granted project permissions.
    pub project_permissions: Vec<Uuid>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            tenant_id: user.tenant_id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.to_string(),
            project_permissions: user.project_permissions,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Login (and redemption) response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// Token type, always `bearer`.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

impl LoginResponse {
    /// Builds the standard bearer-token response.
    pub fn bearer(access_token: String, expires_at: DateTime<Utc>, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
            user: user.into(),
        }
    }
}

/// Registration response: the new tenant plus the owner's login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The newly created tenant.
    pub tenant: Tenant,
    /// Login for the owner account.
    #[serde(flatten)]
    pub login: LoginResponse,
}

/// Invitation summary returned to the inviter.
///
/// Includes the token itself; the inviter delivers it out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationResponse {
    /// The opaque invitation token.
    pub token: String,
    /// Invited email.
    pub email: String,
    /// Role granted on redemption.
    pub role: String,
    /// Projects granted on redemption.
    pub project_ids: Vec<Uuid>,
    /// Expiry timestamp.
    pub expires_at: DateTime<Utc>,
}

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        Self {
            token: invitation.token,
            email: invitation.email,
            role: invitation.role.to_string(),
            project_ids: invitation.project_ids,
            expires_at: invitation.expires_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
