//! Screen repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::screen::{CreateScreen, Screen};

/// Repository for screen registration and token lookups.
#[derive(Debug, Clone)]
pub struct ScreenRepository {
    pool: PgPool,
}

impl ScreenRepository {
    /// Create a new screen repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active screen by its opaque token.
    ///
    /// Used by ingestion, which identifies screens by token only; the
    /// screen row supplies the authoritative tenant and project.
    pub async fn find_by_token(&self, screen_token: &str) -> AppResult<Option<Screen>> {
        sqlx::query_as::<_, Screen>(
            "SELECT * FROM screens WHERE screen_token = $1 AND is_active = TRUE",
        )
        .bind(screen_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find screen by token", e)
        })
    }

    /// List screens for a project within a tenant.
    pub async fn find_by_project(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Screen>> {
        sqlx::query_as::<_, Screen>(
            "SELECT * FROM screens WHERE tenant_id = $1 AND project_id = $2 \
             ORDER BY created_at DESC LIMIT $3",
        )
        .bind(tenant_id)
        .bind(project_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list screens", e))
    }

    /// Register a new screen.
    pub async fn create(&self, data: &CreateScreen) -> AppResult<Screen> {
        sqlx::query_as::<_, Screen>(
            "INSERT INTO screens (tenant_id, project_id, name, screen_token) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(data.project_id)
        .bind(&data.name)
        .bind(&data.screen_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("screens_screen_token_key") =>
            {
                AppError::conflict("Screen token collision, retry registration")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create screen", e),
        })
    }
}
