//! `DeviceCredential` extractor — verifies the ingestion header triple.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use trackhub_auth::credential::ProjectBinding;
use trackhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the tenant id.
pub const TENANT_HEADER: &str = "x-tenant-id";
/// Header carrying the project id.
pub const PROJECT_HEADER: &str = "x-project-id";
/// Header carrying the bundle id.
pub const BUNDLE_HEADER: &str = "x-bundle-id";

/// Extracted, verified device credential available in ingestion handlers.
///
/// Missing or malformed headers are `Unauthenticated`; a well-formed triple
/// that does not resolve to an active project is `Forbidden`.
#[derive(Debug, Clone)]
pub struct DeviceCredential(pub ProjectBinding);

impl std::ops::Deref for DeviceCredential {
    type Target = ProjectBinding;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for DeviceCredential {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let tenant_id = parse_uuid_header(parts, TENANT_HEADER)?;
        let project_id = parse_uuid_header(parts, PROJECT_HEADER)?;
        let bundle_id = header_value(parts, BUNDLE_HEADER)?;

        let binding = state
            .credential_verifier
            .verify(tenant_id, project_id, bundle_id)
            .await?;

        Ok(DeviceCredential(binding))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::unauthenticated(format!("Missing {name} header")))
}

fn parse_uuid_header(parts: &Parts, name: &str) -> Result<Uuid, AppError> {
    header_value(parts, name)?
        .parse()
        .map_err(|_| AppError::unauthenticated(format!("Malformed {name} header")))
}
