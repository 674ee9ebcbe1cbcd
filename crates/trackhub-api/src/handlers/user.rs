//! Tenant user management handlers.

use axum::Json;
use axum::extract::State;

use trackhub_service::auth::CreateUserInput;

use crate::dto::request::CreateUserRequest;
use crate::error::ApiError;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::validate;

/// POST /api/auth/users
///
/// Creates a user directly in the caller's tenant. Admin and above.
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    validate(&req)?;

    let user = state
        .auth_service
        .create_user(
            &auth,
            CreateUserInput {
                email: req.email,
                full_name: req.full_name,
                password: req.password,
                role: req.role,
                project_permissions: req.project_permissions,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/auth/users
///
/// Lists users in the caller's tenant. Admin and above.
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.auth_service.list_users(&auth).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}
