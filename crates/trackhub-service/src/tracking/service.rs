//! Event ingestion and queries.
//!
//! Ingestion runs on the device-credential path and trusts only the
//! verified binding: tenant and project on every written row come from the
//! binding or from rows already scoped to it, never from the request body.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use trackhub_auth::credential::ProjectBinding;
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::error::AppError;
use trackhub_database::repositories::event::EventFilter;
use trackhub_database::repositories::{EventRepository, ScreenRepository, SessionRepository};
use trackhub_entity::event::{CreateEvent, Event};
use trackhub_entity::session::{TimeRange, TrackedSession};

use crate::context::RequestContext;

/// Event name written for screen views.
const SCREEN_VIEW_EVENT: &str = "screen_view";

/// Cap on event query results.
const EVENT_QUERY_LIMIT: i64 = 1000;

/// Data for recording a screen view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackScreenInput {
    /// The open tracked session.
    pub session_id: Uuid,
    /// Token of the viewed screen.
    pub screen_token: String,
    /// Client-side timestamp, when the device buffered the event.
    pub timestamp: Option<DateTime<Utc>>,
    /// Open metadata bag.
    pub metadata: Option<serde_json::Value>,
}

/// Data for recording a custom event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackEventInput {
    /// The open tracked session.
    pub session_id: Uuid,
    /// Custom event name.
    pub event_name: String,
    /// Client-side timestamp, when the device buffered the event.
    pub timestamp: Option<DateTime<Utc>>,
    /// Open metadata bag.
    pub metadata: Option<serde_json::Value>,
}

/// Dashboard-side event query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQueryInput {
    /// Restrict to a time window.
    pub range: Option<TimeRange>,
    /// Restrict to one session.
    pub session_id: Option<Uuid>,
    /// Restrict to one event name.
    pub event_name: Option<String>,
}

/// Handles event ingestion and dashboard queries.
#[derive(Debug, Clone)]
pub struct TrackingService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// Screen repository.
    screen_repo: Arc<ScreenRepository>,
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        screen_repo: Arc<ScreenRepository>,
        session_repo: Arc<SessionRepository>,
        enforcer: Arc<RoleEnforcer>,
    ) -> Self {
        Self {
            event_repo,
            screen_repo,
            session_repo,
            enforcer,
        }
    }

    /// Records a screen-view event.
    ///
    /// The screen token must resolve to an active screen inside the
    /// binding's project; a token from another project is `NotFound`, the
    /// same as a token that never existed.
    pub async fn track_screen(
        &self,
        binding: &ProjectBinding,
        input: TrackScreenInput,
    ) -> Result<Event, AppError> {
        let screen = self
            .screen_repo
            .find_by_token(&input.screen_token)
            .await?
            .filter(|s| s.tenant_id == binding.tenant_id && s.project_id == binding.project_id)
            .ok_or_else(|| AppError::not_found("Screen not found"))?;

        let session = self.checked_session(binding, input.session_id).await?;

        let event = self
            .event_repo
            .insert(&CreateEvent {
                tenant_id: binding.tenant_id,
                project_id: binding.project_id,
                bundle_id: Some(binding.bundle_id.clone()),
                session_id: session.id,
                screen_token: Some(screen.screen_token),
                event_name: SCREEN_VIEW_EVENT.to_string(),
                timestamp: input.timestamp.unwrap_or_else(Utc::now),
                metadata: input.metadata.unwrap_or(serde_json::Value::Null),
            })
            .await?;

        debug!(event_id = %event.id, session_id = %session.id, "Screen view recorded");

        Ok(event)
    }

    /// Records a custom event.
    pub async fn track_event(
        &self,
        binding: &ProjectBinding,
        input: TrackEventInput,
    ) -> Result<Event, AppError> {
        if input.event_name.trim().is_empty() {
            return Err(AppError::validation("Event name cannot be empty"));
        }

        let session = self.checked_session(binding, input.session_id).await?;

        let event = self
            .event_repo
            .insert(&CreateEvent {
                tenant_id: binding.tenant_id,
                project_id: binding.project_id,
                bundle_id: Some(binding.bundle_id.clone()),
                session_id: session.id,
                screen_token: None,
                event_name: input.event_name,
                timestamp: input.timestamp.unwrap_or_else(Utc::now),
                metadata: input.metadata.unwrap_or(serde_json::Value::Null),
            })
            .await?;

        debug!(event_id = %event.id, session_id = %session.id, "Event recorded");

        Ok(event)
    }

    /// Queries events for a project.
    pub async fn query(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        input: EventQueryInput,
    ) -> Result<Vec<Event>, AppError> {
        self.enforcer
            .require_project_access(&ctx.role, &ctx.project_permissions, project_id)?;

        let filter = EventFilter {
            since: input.range.map(|r| r.since(Utc::now())),
            session_id: input.session_id,
            event_name: input.event_name,
        };

        self.event_repo
            .find_filtered(ctx.tenant_id, project_id, &filter, EVENT_QUERY_LIMIT)
            .await
    }

    /// Resolves a session id against the binding and checks it is usable.
    async fn checked_session(
        &self,
        binding: &ProjectBinding,
        session_id: Uuid,
    ) -> Result<TrackedSession, AppError> {
        let session = self
            .session_repo
            .find_by_id(binding.tenant_id, session_id)
            .await?
            .filter(|s| s.project_id == binding.project_id)
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        if !session.is_active || session.expires_at <= Utc::now() {
            return Err(AppError::validation("Session has expired"));
        }

        Ok(session)
    }
}
