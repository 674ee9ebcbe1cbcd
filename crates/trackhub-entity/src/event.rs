//! Event entity model.
//!
//! Events are append-only: this system never updates or deletes a row once
//! written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single tracked event tied to a session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The project the event belongs to.
    pub project_id: Uuid,
    /// Bundle id from the device credential, when available.
    pub bundle_id: Option<String>,
    /// The tracked session this event belongs to.
    pub session_id: Uuid,
    /// Screen token, for screen-view events.
    pub screen_token: Option<String>,
    /// Event name (e.g. `screen_view`, or a custom name).
    pub event_name: String,
    /// Client-supplied timestamp, or server time when absent.
    pub timestamp: DateTime<Utc>,
    /// Open key-value metadata bag.
    pub metadata: serde_json::Value,
    /// When the row was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The project the event belongs to.
    pub project_id: Uuid,
    /// Bundle id from the device credential.
    pub bundle_id: Option<String>,
    /// The tracked session.
    pub session_id: Uuid,
    /// Screen token, for screen-view events.
    pub screen_token: Option<String>,
    /// Event name.
    pub event_name: String,
    /// Client-supplied timestamp, or server time when absent.
    pub timestamp: DateTime<Utc>,
    /// Metadata bag.
    pub metadata: serde_json::Value,
}
