//! Screen management handlers.

use axum::Json;
use axum::extract::{Query, State};

use trackhub_entity::screen::Screen;
use trackhub_service::screen::RegisterScreenInput;

use crate::dto::request::{CreateScreenRequest, ScreenListQuery};
use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::validate;

/// POST /api/screens
///
/// Registers a screen and mints its opaque tracking token. The response is
/// the only place the token is handed out; devices receive it through app
/// configuration.
pub async fn register_screen(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateScreenRequest>,
) -> Result<Json<ApiResponse<Screen>>, ApiError> {
    validate(&req)?;

    let screen = state
        .screen_service
        .register(
            &auth,
            RegisterScreenInput {
                project_id: req.project_id,
                name: req.name,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(screen)))
}

/// GET /api/screens?project_id=
pub async fn list_screens(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ScreenListQuery>,
) -> Result<Json<ApiResponse<Vec<Screen>>>, ApiError> {
    let screens = state.screen_service.list(&auth, query.project_id).await?;
    Ok(Json(ApiResponse::ok(screens)))
}
