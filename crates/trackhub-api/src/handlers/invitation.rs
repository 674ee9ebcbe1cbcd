//! Invitation handlers — issuance and redemption.

use axum::Json;
use axum::extract::State;

use trackhub_service::invitation::{InviteInput, RedeemInput};

use crate::dto::request::{InviteRequest, RegisterWithInviteRequest};
use crate::error::ApiError;
use crate::dto::response::{ApiResponse, InvitationResponse, LoginResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

use super::validate;

/// POST /api/auth/invite
///
/// Issues an invitation into the caller's tenant. Admin and above.
pub async fn invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<InviteRequest>,
) -> Result<Json<ApiResponse<InvitationResponse>>, ApiError> {
    validate(&req)?;

    let invitation = state
        .invitation_service
        .invite(
            &auth,
            InviteInput {
                email: req.email,
                role: req.role,
                project_ids: req.project_ids,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(invitation.into())))
}

/// POST /api/auth/register-with-invite
///
/// Redeems an invitation, creating the invited user and logging them in.
/// No bearer token required; the invitation token is the credential.
pub async fn redeem(
    State(state): State<AppState>,
    Json(req): Json<RegisterWithInviteRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate(&req)?;

    let outcome = state
        .invitation_service
        .redeem(RedeemInput {
            token: req.token,
            email: req.email,
            full_name: req.full_name,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse::bearer(
        outcome.access_token,
        outcome.expires_at,
        outcome.user,
    ))))
}
