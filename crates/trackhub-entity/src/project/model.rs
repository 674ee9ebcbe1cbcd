//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::platform::Platform;

/// A mobile app registered under a tenant.
///
/// The (tenant_id, id, bundle_id) triple doubles as the device credential
/// for unauthenticated ingestion — equivalent in power to a password.
/// Revoking a leaked credential means deactivating the project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Target platform.
    pub platform: Platform,
    /// Platform-level app identifier, unique within the tenant.
    pub bundle_id: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the project accepts ingestion.
    pub is_active: bool,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// Project name.
    pub name: String,
    /// Target platform.
    pub platform: Platform,
    /// Bundle identifier.
    pub bundle_id: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Fields that can be updated on an existing project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProject {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}
