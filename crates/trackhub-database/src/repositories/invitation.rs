//! Invitation repository implementation.

use sqlx::PgPool;

use trackhub_core::error::{AppError, ErrorKind};
use trackhub_core::result::AppResult;
use trackhub_entity::invitation::{CreateInvitation, Invitation};

/// Repository for one-time invitation tokens.
#[derive(Debug, Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Create a new invitation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new invitation.
    pub async fn create(&self, data: &CreateInvitation) -> AppResult<Invitation> {
        sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (token, email, tenant_id, role, project_ids, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.token)
        .bind(&data.email)
        .bind(data.tenant_id)
        .bind(data.role)
        .bind(&data.project_ids)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invitation", e))
    }

    /// Find a redeemable invitation with the compound predicate.
    ///
    /// "Not found", "already used", and "expired" are indistinguishable to
    /// the caller; all three come back as `None`.
    pub async fn find_redeemable(&self, token: &str) -> AppResult<Option<Invitation>> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations \
             WHERE token = $1 AND used = FALSE AND expires_at > NOW()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find invitation", e))
    }

    /// Atomically consume an invitation.
    ///
    /// Single conditional UPDATE, not a read-then-write pair: of two
    /// concurrent redemptions only one gets a row back; the loser sees
    /// `None`.
    pub async fn mark_used(&self, token: &str) -> AppResult<Option<Invitation>> {
        sqlx::query_as::<_, Invitation>(
            "UPDATE invitations SET used = TRUE \
             WHERE token = $1 AND used = FALSE AND expires_at > NOW() \
             RETURNING *",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to consume invitation", e))
    }
}
