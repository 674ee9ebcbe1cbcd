//! Invitation issuance and redemption.
//!
//! Redemption failures are deliberately undifferentiated: an unknown token,
//! an expired one, and an already-used one all produce the same error, so
//! the endpoint cannot be used to probe which tokens exist.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use trackhub_auth::jwt::JwtEncoder;
use trackhub_auth::opaque;
use trackhub_auth::password::{PasswordHasher, PasswordValidator};
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::config::auth::AuthConfig;
use trackhub_core::error::AppError;
use trackhub_database::repositories::{
    InvitationRepository, ProjectRepository, UserRepository,
};
use trackhub_entity::invitation::{CreateInvitation, Invitation};
use trackhub_entity::user::model::CreateUser;
use trackhub_entity::user::UserRole;

use crate::auth::LoginOutcome;
use crate::context::RequestContext;

/// Data for issuing an invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteInput {
    /// Email the invitation is addressed to.
    pub email: String,
    /// Role granted on redemption.
    pub role: UserRole,
    /// Projects granted on redemption.
    pub project_ids: Vec<Uuid>,
}

/// Data for redeeming an invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemInput {
    /// The invitation token.
    pub token: String,
    /// Email of the registering user; must match the invitation.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Password (plaintext, hashed here).
    pub password: String,
}

/// Handles invitation issuance and single-use redemption.
#[derive(Debug, Clone)]
pub struct InvitationService {
    /// Invitation repository.
    invitation_repo: Arc<InvitationRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Project repository, for validating grants.
    project_repo: Arc<ProjectRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Access token encoder, for logging the redeemer in.
    encoder: Arc<JwtEncoder>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
    /// Invitation lifetime.
    ttl: Duration,
}

impl InvitationService {
    /// Creates a new invitation service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        invitation_repo: Arc<InvitationRepository>,
        user_repo: Arc<UserRepository>,
        project_repo: Arc<ProjectRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        enforcer: Arc<RoleEnforcer>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            invitation_repo,
            user_repo,
            project_repo,
            hasher,
            validator,
            encoder,
            enforcer,
            ttl: Duration::days(config.invitation_ttl_days as i64),
        }
    }

    /// Issues an invitation into the caller's tenant.
    ///
    /// Requires at least admin. The granted role must not outrank the
    /// caller's and can never be owner, and every granted project must be
    /// active in the tenant.
    pub async fn invite(
        &self,
        ctx: &RequestContext,
        input: InviteInput,
    ) -> Result<Invitation, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        // The owner role is assigned once, at tenant registration.
        if input.role == UserRole::Owner {
            return Err(AppError::forbidden("The owner role cannot be granted"));
        }
        self.enforcer.require_minimum_role(&ctx.role, &input.role)?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        for project_id in &input.project_ids {
            if self
                .project_repo
                .find_active(ctx.tenant_id, *project_id)
                .await?
                .is_none()
            {
                return Err(AppError::invalid_reference(format!(
                    "Project {project_id} does not exist in this tenant"
                )));
            }
        }

        let invitation = self
            .invitation_repo
            .create(&CreateInvitation {
                token: opaque::invitation_token(),
                email: input.email,
                tenant_id: ctx.tenant_id,
                role: input.role,
                project_ids: input.project_ids,
                expires_at: Utc::now() + self.ttl,
            })
            .await?;

        info!(
            tenant_id = %ctx.tenant_id,
            invited_by = %ctx.user_id,
            role = %invitation.role,
            "Invitation issued"
        );

        Ok(invitation)
    }

    /// Redeems an invitation, creating the invited user and logging them in.
    ///
    /// The conditional UPDATE on `used` is the single point of consumption:
    /// of two concurrent redemptions of the same token, exactly one gets the
    /// row back and the other fails as if the token never existed.
    pub async fn redeem(&self, input: RedeemInput) -> Result<LoginOutcome, AppError> {
        let invitation = self
            .invitation_repo
            .find_redeemable(&input.token)
            .await?
            .ok_or_else(AppError::invalid_invitation)?;

        // Exact match, not normalized; the invitation was addressed to one
        // specific string.
        if invitation.email != input.email {
            return Err(AppError::validation(
                "Email does not match the invitation",
            ));
        }

        self.validator.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        // Consume before creating the user; a lost race surfaces as an
        // invalid invitation.
        let invitation = match self.invitation_repo.mark_used(&invitation.token).await? {
            Some(invitation) => invitation,
            None => {
                warn!("Invitation consumed concurrently during redemption");
                return Err(AppError::invalid_invitation());
            }
        };

        let user = self
            .user_repo
            .create(&CreateUser {
                tenant_id: invitation.tenant_id,
                email: input.email,
                full_name: input.full_name,
                password_hash,
                role: invitation.role,
                project_permissions: invitation.project_ids,
            })
            .await?;

        let (access_token, expires_at) = self.encoder.issue_for_login(&user)?;

        info!(
            user_id = %user.id,
            tenant_id = %user.tenant_id,
            role = %user.role,
            "Invitation redeemed"
        );

        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use trackhub_core::config::auth::AuthConfig;
    use trackhub_core::error::ErrorKind;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            access_ttl_minutes: 30,
            invitation_ttl_days: 7,
            session_ttl_hours: 24,
            password_min_length: 1,
            password_strength_check: false,
        }
    }

    // A lazy pool never connects; tests below must fail before any query.
    fn service() -> InvitationService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        let config = auth_config();
        InvitationService::new(
            Arc::new(InvitationRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(ProjectRepository::new(pool)),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(RoleEnforcer::new()),
            &config,
        )
    }

    fn ctx(role: UserRole) -> RequestContext {
        RequestContext {
            user_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            email: "a@acme.io".to_string(),
            role,
            project_permissions: vec![],
        }
    }

    #[tokio::test]
    async fn owner_cannot_invite_another_owner() {
        let err = service()
            .invite(
                &ctx(UserRole::Owner),
                InviteInput {
                    email: "second@acme.io".to_string(),
                    role: UserRole::Owner,
                    project_ids: vec![],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn developer_cannot_invite() {
        let err = service()
            .invite(
                &ctx(UserRole::Developer),
                InviteInput {
                    email: "peer@acme.io".to_string(),
                    role: UserRole::Developer,
                    project_ids: vec![],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
