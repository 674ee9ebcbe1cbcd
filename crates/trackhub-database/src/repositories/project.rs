//! Project repository implementation.
//!
//! Every finder except [`ProjectRepository::find_device_binding`] is scoped
//! by tenant id; a project id from another tenant simply does not resolve.

use sqlx::PgPool;
use uuid::Uuid;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::project::{CreateProject, Project, UpdateProject};

/// Repository for project CRUD and credential lookups.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a project within a tenant.
    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project by id", e)
            })
    }

    /// Find an active project within a tenant.
    pub async fn find_active(&self, tenant_id: Uuid, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE id = $1 AND tenant_id = $2 AND is_active = TRUE",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active project", e)
        })
    }

    /// Resolve a device-credential triple to an active project.
    ///
    /// All three values must match; anything else is treated as a failed
    /// credential by the caller.
    pub async fn find_device_binding(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        bundle_id: &str,
    ) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects \
             WHERE id = $1 AND tenant_id = $2 AND bundle_id = $3 AND is_active = TRUE",
        )
        .bind(project_id)
        .bind(tenant_id)
        .bind(bundle_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve device credential", e)
        })
    }

    /// List projects belonging to a tenant.
    pub async fn find_by_tenant(&self, tenant_id: Uuid, limit: i64) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE tenant_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(tenant_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Create a new project.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (tenant_id, name, platform, bundle_id, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(&data.name)
        .bind(data.platform)
        .bind(&data.bundle_id)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("projects_tenant_id_bundle_id_key") =>
            {
                AppError::conflict(format!(
                    "Bundle ID '{}' already exists for this tenant",
                    data.bundle_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create project", e),
        })
    }

    /// Update a project's mutable fields within a tenant.
    pub async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        data: &UpdateProject,
    ) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = COALESCE($3, name), \
                                 description = COALESCE($4, description), \
                                 updated_at = NOW() \
             WHERE id = $1 AND tenant_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(tenant_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))
    }

    /// Deactivate a project, revoking its device credential.
    pub async fn deactivate(&self, tenant_id: Uuid, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 AND tenant_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate project", e))
    }
}
