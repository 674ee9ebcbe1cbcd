//! Event ingestion and query handlers.

use axum::Json;
use axum::extract::{Query, State};

use trackhub_entity::event::Event;
use trackhub_service::tracking::{EventQueryInput, TrackEventInput, TrackScreenInput};

use crate::dto::request::{EventListQuery, TrackEventRequest, TrackScreenRequest};
use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, DeviceCredential};
use crate::state::AppState;

use super::validate;

/// POST /api/events/track_screen
///
/// Records a screen-view event for a verified device.
pub async fn track_screen(
    State(state): State<AppState>,
    device: DeviceCredential,
    Json(req): Json<TrackScreenRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    validate(&req)?;

    let event = state
        .tracking_service
        .track_screen(
            &device,
            TrackScreenInput {
                session_id: req.session_id,
                screen_token: req.screen_token,
                timestamp: req.timestamp,
                metadata: req.metadata,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/events/track_event
///
/// Records a custom event for a verified device.
pub async fn track_event(
    State(state): State<AppState>,
    device: DeviceCredential,
    Json(req): Json<TrackEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    validate(&req)?;

    let event = state
        .tracking_service
        .track_event(
            &device,
            TrackEventInput {
                session_id: req.session_id,
                event_name: req.event_name,
                timestamp: req.timestamp,
                metadata: req.metadata,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(event)))
}

/// GET /api/events?project_id=&time_range=&session_id=&event_name=
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let events = state
        .tracking_service
        .query(
            &auth,
            query.project_id,
            EventQueryInput {
                range: query.time_range,
                session_id: query.session_id,
                event_name: query.event_name,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(events)))
}
