//! Project management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use trackhub_entity::project::{Project, UpdateProject};
use trackhub_service::project::CreateProjectInput;

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::validate;

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    validate(&req)?;

    let project = state
        .project_service
        .create(
            &auth,
            CreateProjectInput {
                name: req.name,
                platform: req.platform,
                bundle_id: req.bundle_id,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(project)))
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state.project_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.project_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state
        .project_service
        .update(
            &auth,
            id,
            UpdateProject {
                name: req.name,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(project)))
}

/// PUT /api/projects/{id}/deactivate
///
/// Deactivation, not deletion: data stays queryable, ingestion stops.
/// This is the revocation path for a compromised device credential.
pub async fn deactivate_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.project_service.deactivate(&auth, id).await?;
    Ok(Json(ApiResponse::ok(project)))
}
