//! Tracked session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::session::{CreateTrackedSession, TrackedSession};

/// Repository for tracked device sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a new tracked session.
    pub async fn create(&self, data: &CreateTrackedSession) -> AppResult<TrackedSession> {
        sqlx::query_as::<_, TrackedSession>(
            "INSERT INTO tracked_sessions \
             (tenant_id, project_id, bundle_id, device_id, app_version, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(data.project_id)
        .bind(&data.bundle_id)
        .bind(&data.device_id)
        .bind(&data.app_version)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session within a tenant.
    pub async fn find_by_id(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<TrackedSession>> {
        sqlx::query_as::<_, TrackedSession>(
            "SELECT * FROM tracked_sessions WHERE id = $1 AND tenant_id = $2",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// List sessions for a project within a tenant.
    pub async fn find_by_project(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<TrackedSession>> {
        sqlx::query_as::<_, TrackedSession>(
            "SELECT * FROM tracked_sessions WHERE tenant_id = $1 AND project_id = $2 \
             ORDER BY created_at DESC LIMIT $3",
        )
        .bind(tenant_id)
        .bind(project_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sessions", e))
    }

    /// List sessions for one device within a project.
    pub async fn find_by_device(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        device_id: &str,
        limit: i64,
    ) -> AppResult<Vec<TrackedSession>> {
        sqlx::query_as::<_, TrackedSession>(
            "SELECT * FROM tracked_sessions \
             WHERE tenant_id = $1 AND project_id = $2 AND device_id = $3 \
             ORDER BY created_at DESC LIMIT $4",
        )
        .bind(tenant_id)
        .bind(project_id)
        .bind(device_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list device sessions", e)
        })
    }

    /// List sessions created since a point in time within a project.
    pub async fn find_since(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        since: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<TrackedSession>> {
        sqlx::query_as::<_, TrackedSession>(
            "SELECT * FROM tracked_sessions \
             WHERE tenant_id = $1 AND project_id = $2 AND created_at >= $3 \
             ORDER BY created_at DESC LIMIT $4",
        )
        .bind(tenant_id)
        .bind(project_id)
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list sessions by time", e)
        })
    }
}
