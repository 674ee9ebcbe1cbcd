//! Tracked session lifecycle and queries.
//!
//! Sessions are opened by devices through the credential path and read by
//! dashboard users through the bearer path. The two never mix: opening
//! takes a verified [`ProjectBinding`], reading takes a [`RequestContext`].

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use trackhub_auth::credential::ProjectBinding;
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::config::auth::AuthConfig;
use trackhub_core::error::AppError;
use trackhub_database::repositories::SessionRepository;
use trackhub_entity::session::{CreateTrackedSession, TimeRange, TrackedSession};

use crate::context::RequestContext;

/// Cap on session listings.
const SESSION_LIST_LIMIT: i64 = 500;

/// Data a device supplies when opening a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSessionInput {
    /// Device identifier.
    pub device_id: String,
    /// Client app version.
    pub app_version: String,
}

/// Handles tracked session lifecycle and dashboard queries.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
    /// Session lifetime.
    ttl: Duration,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        session_repo: Arc<SessionRepository>,
        enforcer: Arc<RoleEnforcer>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            session_repo,
            enforcer,
            ttl: Duration::hours(config.session_ttl_hours as i64),
        }
    }

    /// Opens a tracked session for a verified device.
    ///
    /// Tenant and project come from the binding, never from the request
    /// body; a device cannot open a session in someone else's project.
    pub async fn open(
        &self,
        binding: &ProjectBinding,
        input: OpenSessionInput,
    ) -> Result<TrackedSession, AppError> {
        let session = self
            .session_repo
            .create(&CreateTrackedSession {
                tenant_id: binding.tenant_id,
                project_id: binding.project_id,
                bundle_id: binding.bundle_id.clone(),
                device_id: input.device_id,
                app_version: input.app_version,
                expires_at: Utc::now() + self.ttl,
            })
            .await?;

        info!(
            session_id = %session.id,
            project_id = %binding.project_id,
            tenant_id = %binding.tenant_id,
            "Tracked session opened"
        );

        Ok(session)
    }

    /// Fetches one session.
    ///
    /// The lookup is tenant-scoped first, so a session id from another
    /// tenant is `NotFound` before any project check runs.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        session_id: Uuid,
    ) -> Result<TrackedSession, AppError> {
        let session = self
            .session_repo
            .find_by_id(ctx.tenant_id, session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, session.project_id)?;

        Ok(session)
    }

    /// Lists sessions for a project.
    pub async fn list_by_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Vec<TrackedSession>, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.session_repo
            .find_by_project(ctx.tenant_id, project_id, SESSION_LIST_LIMIT)
            .await
    }

    /// Lists sessions for one device within a project.
    pub async fn list_by_device(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        device_id: &str,
    ) -> Result<Vec<TrackedSession>, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.session_repo
            .find_by_device(ctx.tenant_id, project_id, device_id, SESSION_LIST_LIMIT)
            .await
    }

    /// Lists sessions opened within the given time window.
    pub async fn list_recent(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        range: TimeRange,
    ) -> Result<Vec<TrackedSession>, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        self.session_repo
            .find_since(
                ctx.tenant_id,
                project_id,
                range.since(Utc::now()),
                SESSION_LIST_LIMIT,
            )
            .await
    }
}
