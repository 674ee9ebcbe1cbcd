//! `AuthUser` extractor — validates the bearer token and resolves the live user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use trackhub_core::error::AppError;
use trackhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode(token)?;

        // The claims are a stale snapshot; re-read the live row so that a
        // deactivation or role change beats any token still in flight.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthenticated("Could not validate credentials"))?;

        if !user.is_active {
            return Err(AppError::unauthenticated("Could not validate credentials").into());
        }

        Ok(AuthUser(RequestContext::from(&user)))
    }
}
