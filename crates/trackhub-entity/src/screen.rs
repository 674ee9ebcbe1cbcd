//! Screen entity model.
//!
//! A screen is a registered display surface within a project. At creation it
//! receives a short opaque screen token; ingestion endpoints reference
//! screens by that token rather than by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered screen within a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Screen {
    /// Unique screen identifier.
    pub id: Uuid,
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The project this screen belongs to.
    pub project_id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Opaque token identifying this screen in tracking calls.
    pub screen_token: String,
    /// Whether the screen accepts tracking events.
    pub is_active: bool,
    /// When the screen was registered.
    pub created_at: DateTime<Utc>,
    /// When the screen was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScreen {
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The project this screen belongs to.
    pub project_id: Uuid,
    /// Screen name.
    pub name: String,
    /// Generated opaque token.
    pub screen_token: String,
}
