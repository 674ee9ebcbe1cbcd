//! Screen registration and listing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use trackhub_auth::opaque;
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::error::AppError;
use trackhub_database::repositories::{ProjectRepository, ScreenRepository};
use trackhub_entity::screen::{CreateScreen, Screen};
use trackhub_entity::user::UserRole;

use crate::context::RequestContext;

/// Cap on screen listings.
const SCREEN_LIST_LIMIT: i64 = 500;

/// Data for registering a screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterScreenInput {
    /// The project the screen belongs to.
    pub project_id: Uuid,
    /// Screen name.
    pub name: String,
}

/// Handles screen registration within the caller's tenant.
#[derive(Debug, Clone)]
pub struct ScreenService {
    /// Screen repository.
    screen_repo: Arc<ScreenRepository>,
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
}

impl ScreenService {
    /// Creates a new screen service.
    pub fn new(
        screen_repo: Arc<ScreenRepository>,
        project_repo: Arc<ProjectRepository>,
        enforcer: Arc<RoleEnforcer>,
    ) -> Self {
        Self {
            screen_repo,
            project_repo,
            enforcer,
        }
    }

    /// Registers a screen, minting its opaque tracking token.
    ///
    /// Requires at least admin: the minted token is an ingestion credential,
    /// so handing one out is a privileged act even for project members.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        input: RegisterScreenInput,
    ) -> Result<Screen, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, input.project_id)?;

        // The project must still be active; screens on a deactivated project
        // would mint tokens that ingestion can never use.
        self.project_repo
            .find_active(ctx.tenant_id, input.project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        let screen = self
            .screen_repo
            .create(&CreateScreen {
                tenant_id: ctx.tenant_id,
                project_id: input.project_id,
                name: input.name,
                screen_token: opaque::screen_token(),
            })
            .await?;

        info!(
            screen_id = %screen.id,
            project_id = %screen.project_id,
            tenant_id = %ctx.tenant_id,
            "Screen registered"
        );

        Ok(screen)
    }

    /// Lists screens for a project.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Vec<Screen>, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.screen_repo
            .find_by_project(ctx.tenant_id, project_id, SCREEN_LIST_LIMIT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use trackhub_core::error::ErrorKind;

    // A lazy pool never connects; tests below must fail before any query.
    fn service() -> ScreenService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        ScreenService::new(
            Arc::new(ScreenRepository::new(pool.clone())),
            Arc::new(ProjectRepository::new(pool)),
            Arc::new(RoleEnforcer::new()),
        )
    }

    fn ctx(role: UserRole, projects: Vec<Uuid>) -> RequestContext {
        RequestContext {
            user_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            email: "dev@acme.io".to_string(),
            role,
            project_permissions: projects,
        }
    }

    #[tokio::test]
    async fn developer_cannot_register_screens_even_on_own_project() {
        let project = Uuid::new_v4();
        let err = service()
            .register(
                &ctx(UserRole::Developer, vec![project]),
                RegisterScreenInput {
                    project_id: project,
                    name: "Checkout".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn admin_without_membership_cannot_register_screens() {
        let err = service()
            .register(
                &ctx(UserRole::Admin, vec![]),
                RegisterScreenInput {
                    project_id: Uuid::new_v4(),
                    name: "Checkout".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
