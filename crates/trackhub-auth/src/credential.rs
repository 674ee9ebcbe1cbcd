//! Device-credential verification.
//!
//! Unauthenticated ingestion endpoints authenticate with a header triple
//! (tenant id, project id, bundle id) instead of a bearer token. The triple
//! is a capability credential equivalent in power to a password: revoking a
//! leaked one means deactivating the project. Verification yields a
//! validated project binding, never a user principal.

use std::sync::Arc;

use uuid::Uuid;

use trackhub_core::error::AppError;
use trackhub_database::repositories::ProjectRepository;
use trackhub_entity::project::{Platform, Project};

/// A validated device credential: the project an ingestion request is
/// allowed to write into.
#[derive(Debug, Clone)]
pub struct ProjectBinding {
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The verified project.
    pub project_id: Uuid,
    /// The bundle id the device presented.
    pub bundle_id: String,
    /// Project platform.
    pub platform: Platform,
}

impl From<Project> for ProjectBinding {
    fn from(project: Project) -> Self {
        Self {
            tenant_id: project.tenant_id,
            project_id: project.id,
            bundle_id: project.bundle_id,
            platform: project.platform,
        }
    }
}

/// Verifies device-credential header triples against the project registry.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
}

impl CredentialVerifier {
    /// Creates a new verifier.
    pub fn new(project_repo: Arc<ProjectRepository>) -> Self {
        Self { project_repo }
    }

    /// Resolves a header triple to a project binding.
    ///
    /// The project must match all three values and be active; anything else
    /// is `Forbidden`. The error does not say which of the three values was
    /// wrong.
    pub async fn verify(
        &self,
        tenant_id: Uuid,
        project_id: Uuid,
        bundle_id: &str,
    ) -> Result<ProjectBinding, AppError> {
        let project = self
            .project_repo
            .find_device_binding(tenant_id, project_id, bundle_id)
            .await?
            .ok_or_else(|| AppError::forbidden("Invalid project credentials"))?;

        Ok(project.into())
    }
}
