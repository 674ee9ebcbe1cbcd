//! Tenant repository implementation.

use sqlx::PgPool;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::tenant::{CreateTenant, Tenant};

/// Repository for tenant records.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new tenant.
    pub async fn create(&self, data: &CreateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create tenant", e))
    }
}
