//! Event repository implementation.
//!
//! Events are append-only: there is deliberately no update or delete here.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::event::{CreateEvent, Event};

/// Filters for event queries. All are combined with the mandatory tenant
/// and project scope.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only events created at or after this time.
    pub since: Option<DateTime<Utc>>,
    /// Only events belonging to this session.
    pub session_id: Option<Uuid>,
    /// Only events with this name.
    pub event_name: Option<String>,
}

/// Repository for the append-only event stream.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new event.
    pub async fn insert(&self, data: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events \
             (tenant_id, project_id, bundle_id, session_id, screen_token, event_name, timestamp, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(data.project_id)
        .bind(&data.bundle_id)
        .bind(data.session_id)
        .bind(&data.screen_token)
        .bind(&data.event_name)
        .bind(data.timestamp)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert event", e))
    }

    /// Query events for a project within a tenant.
    pub async fn find_filtered(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        filter: &EventFilter,
        limit: i64,
    ) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events \
             WHERE tenant_id = $1 AND project_id = $2 \
               AND ($3::timestamptz IS NULL OR created_at >= $3) \
               AND ($4::uuid IS NULL OR session_id = $4) \
               AND ($5::text IS NULL OR event_name = $5) \
             ORDER BY created_at DESC LIMIT $6",
        )
        .bind(tenant_id)
        .bind(project_id)
        .bind(filter.since)
        .bind(filter.session_id)
        .bind(&filter.event_name)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query events", e))
    }
}
