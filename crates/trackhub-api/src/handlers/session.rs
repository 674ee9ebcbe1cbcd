//! Tracked session handlers.
//!
//! `open_session` lives on the device-credential path; the rest are
//! dashboard queries behind a bearer token.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use trackhub_entity::session::TrackedSession;
use trackhub_service::session::OpenSessionInput;

use crate::dto::request::{
    DeviceSessionQuery, OpenSessionRequest, SessionListQuery, TimeSessionQuery,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, DeviceCredential};
use crate::state::AppState;

use super::validate;

/// POST /api/sessions/create-session
///
/// Opens a tracked session for a verified device.
pub async fn open_session(
    State(state): State<AppState>,
    device: DeviceCredential,
    Json(req): Json<OpenSessionRequest>,
) -> Result<Json<ApiResponse<TrackedSession>>, ApiError> {
    validate(&req)?;

    let session = state
        .session_service
        .open(
            &device,
            OpenSessionInput {
                device_id: req.device_id,
                app_version: req.app_version,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(session)))
}

/// GET /api/sessions?project_id=
pub async fn list_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SessionListQuery>,
) -> Result<Json<ApiResponse<Vec<TrackedSession>>>, ApiError> {
    let sessions = state
        .session_service
        .list_by_project(&auth, query.project_id)
        .await?;

    Ok(Json(ApiResponse::ok(sessions)))
}

/// GET /api/sessions/device?project_id=&device_id=
pub async fn list_device_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DeviceSessionQuery>,
) -> Result<Json<ApiResponse<Vec<TrackedSession>>>, ApiError> {
    let sessions = state
        .session_service
        .list_by_device(&auth, query.project_id, &query.device_id)
        .await?;

    Ok(Json(ApiResponse::ok(sessions)))
}

/// GET /api/sessions/time?project_id=&time_range=1d|1w|1m|3m
pub async fn list_recent_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TimeSessionQuery>,
) -> Result<Json<ApiResponse<Vec<TrackedSession>>>, ApiError> {
    let sessions = state
        .session_service
        .list_recent(&auth, query.project_id, query.time_range)
        .await?;

    Ok(Json(ApiResponse::ok(sessions)))
}

/// GET /api/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TrackedSession>>, ApiError> {
    let session = state.session_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(session)))
}
