//! Auth handlers — registration, login, me.

use axum::Json;
use axum::extract::State;

use trackhub_service::auth::RegisterInput;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::dto::response::{ApiResponse, LoginResponse, RegisterResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::validate;

/// POST /api/auth/register
///
/// Creates a tenant with its owner account and logs the owner in.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>, ApiError> {
    validate(&req)?;

    let outcome = state
        .auth_service
        .register(RegisterInput {
            tenant_name: req.tenant_name,
            tenant_description: req.tenant_description,
            email: req.email,
            full_name: req.full_name,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(RegisterResponse {
        tenant: outcome.tenant,
        login: LoginResponse::bearer(outcome.access_token, outcome.expires_at, outcome.owner),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate(&req)?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse::bearer(
        outcome.access_token,
        outcome.expires_at,
        outcome.user,
    ))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
