//! Tenant entity model.
//!
//! The tenant is the top-level isolation boundary: it owns users, projects,
//! screens, sessions, and events. A tenant is created at registration and is
//! never transferred.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered tenant (customer account).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the tenant is active.
    pub is_active: bool,
    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
    /// When the tenant was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Tenant name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}
