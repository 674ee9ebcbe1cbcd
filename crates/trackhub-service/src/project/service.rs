//! Project management operations.
//!
//! Every lookup goes through tenant-scoped repository finders, so a project
//! id from another tenant resolves to `NotFound` rather than revealing that
//! the project exists.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::error::AppError;
use trackhub_database::repositories::ProjectRepository;
use trackhub_entity::project::{CreateProject, Platform, Project, UpdateProject};
use trackhub_entity::user::UserRole;

use crate::context::RequestContext;

/// Cap on project listings.
const PROJECT_LIST_LIMIT: i64 = 200;

/// Data for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,
    /// Target platform.
    pub platform: Platform,
    /// Bundle identifier, unique within the tenant.
    pub bundle_id: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Handles project CRUD within the caller's tenant.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(project_repo: Arc<ProjectRepository>, enforcer: Arc<RoleEnforcer>) -> Self {
        Self {
            project_repo,
            enforcer,
        }
    }

    /// Creates a project. Requires at least admin.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateProjectInput,
    ) -> Result<Project, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;

        let project = self
            .project_repo
            .create(&CreateProject {
                tenant_id: ctx.tenant_id,
                name: input.name,
                platform: input.platform,
                bundle_id: input.bundle_id,
                description: input.description,
            })
            .await?;

        info!(
            project_id = %project.id,
            tenant_id = %ctx.tenant_id,
            created_by = %ctx.user_id,
            "Project created"
        );

        Ok(project)
    }

    /// Lists the caller's visible projects.
    ///
    /// Owners see every project in the tenant; everyone else sees only the
    /// projects in their permission set.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Project>, AppError> {
        let mut projects = self
            .project_repo
            .find_by_tenant(ctx.tenant_id, PROJECT_LIST_LIMIT)
            .await?;

        if !ctx.is_owner() {
            projects.retain(|p| ctx.project_permissions.contains(&p.id));
        }

        Ok(projects)
    }

    /// Fetches one project.
    pub async fn get(&self, ctx: &RequestContext, project_id: Uuid) -> Result<Project, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.project_repo
            .find_by_id(ctx.tenant_id, project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Updates a project's name or description. Requires at least admin.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        changes: UpdateProject,
    ) -> Result<Project, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.project_repo
            .update(ctx.tenant_id, project_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Deactivates a project, revoking its device credential.
    ///
    /// Requires at least admin. Existing data stays queryable; new ingestion
    /// against the project's credential triple starts failing immediately.
    pub async fn deactivate(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Project, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        let project = self
            .project_repo
            .deactivate(ctx.tenant_id, project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        info!(
            project_id = %project.id,
            tenant_id = %ctx.tenant_id,
            deactivated_by = %ctx.user_id,
            "Project deactivated"
        );

        Ok(project)
    }
}
