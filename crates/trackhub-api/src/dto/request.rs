//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use trackhub_entity::project::Platform;
use trackhub_entity::session::TimeRange;
use trackhub_entity::user::UserRole;

/// Tenant self-registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Name for the new tenant.
    #[validate(length(min = 1, max = 200, message = "Tenant name is required"))]
    pub tenant_name: String,
    /// Optional tenant description.
    pub tenant_description: Option<String>,
    /// Owner email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Owner display name.
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub full_name: String,
    /// Owner password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Invitation issuance request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteRequest {
    /// Email the invitation is addressed to.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Role granted on redemption.
    pub role: UserRole,
    /// Projects granted on redemption.
    #[serde(default)]
    pub project_ids: Vec<Uuid>,
}

/// Invitation redemption request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterWithInviteRequest {
    /// The invitation token.
    #[validate(length(min = 1, message = "Invitation token is required"))]
    pub token: String,
    /// Email, must match the invitation.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub full_name: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Direct user creation request body (admin and above).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email for the new user.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub full_name: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role to assign.
    pub role: UserRole,
    /// Projects the new user may act on.
    #[serde(default)]
    pub project_permissions: Vec<Uuid>,
}

/// Project creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 200, message = "Project name is required"))]
    pub name: String,
    /// Target platform.
    pub platform: Platform,
    /// Bundle identifier, unique within the tenant.
    #[validate(length(min = 1, max = 255, message = "Bundle ID is required"))]
    pub bundle_id: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Project update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Screen registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScreenRequest {
    /// The project the screen belongs to.
    pub project_id: Uuid,
    /// Screen name.
    #[validate(length(min = 1, max = 200, message = "Screen name is required"))]
    pub name: String,
}

/// Query parameters for screen listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenListQuery {
    /// The project to list screens for.
    pub project_id: Uuid,
}

/// Session-open request body (device-credential path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OpenSessionRequest {
    /// Device identifier.
    #[validate(length(min = 1, max = 255, message = "Device ID is required"))]
    pub device_id: String,
    /// Client app version.
    #[validate(length(min = 1, max = 64, message = "App version is required"))]
    pub app_version: String,
}

/// Screen-view tracking request body (device-credential path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrackScreenRequest {
    /// The open tracked session.
    pub session_id: Uuid,
    /// Token of the viewed screen.
    #[validate(length(min = 1, message = "Screen token is required"))]
    pub screen_token: String,
    /// Client-side timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Open metadata bag.
    pub metadata: Option<serde_json::Value>,
}

/// Custom event tracking request body (device-credential path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrackEventRequest {
    /// The open tracked session.
    pub session_id: Uuid,
    /// Event name.
    #[validate(length(min = 1, max = 128, message = "Event name is required"))]
    pub event_name: String,
    /// Client-side timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Open metadata bag.
    pub metadata: Option<serde_json::Value>,
}

/// Query parameters for project-wide session listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListQuery {
    /// The project to list sessions for.
    pub project_id: Uuid,
}

/// Query parameters for per-device session listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSessionQuery {
    /// The project to list sessions for.
    pub project_id: Uuid,
    /// The device to restrict to.
    pub device_id: String,
}

/// Query parameters for time-windowed session listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSessionQuery {
    /// The project to list sessions for.
    pub project_id: Uuid,
    /// Time window (`1d`, `1w`, `1m`, `3m`).
    pub time_range: TimeRange,
}

/// Query parameters for event listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListQuery {
    /// The project to list events for.
    pub project_id: Uuid,
    /// Restrict to a time window (`1d`, `1w`, `1m`, `3m`).
    pub time_range: Option<TimeRange>,
    /// Restrict to one session.
    pub session_id: Option<Uuid>,
    /// Restrict to one event name.
    pub event_name: Option<String>,
}
