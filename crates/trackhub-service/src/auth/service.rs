//! Registration, login, and tenant user management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use trackhub_auth::jwt::JwtEncoder;
use trackhub_auth::password::{PasswordHasher, PasswordValidator};
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::error::AppError;
use trackhub_database::repositories::{ProjectRepository, TenantRepository, UserRepository};
use trackhub_entity::tenant::{CreateTenant, Tenant};
use trackhub_entity::user::model::CreateUser;
use trackhub_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Cap on tenant user listings.
const USER_LIST_LIMIT: i64 = 200;

/// Data for self-service registration of a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    /// Name for the new tenant.
    pub tenant_name: String,
    /// Optional tenant description.
    pub tenant_description: Option<String>,
    /// Owner email.
    pub email: String,
    /// Owner display name.
    pub full_name: String,
    /// Owner password (plaintext, hashed here).
    pub password: String,
}

/// Result of a successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterOutcome {
    /// The newly created tenant.
    pub tenant: Tenant,
    /// The tenant owner.
    pub owner: User,
    /// Access token for the owner, issued with the login TTL.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Data for creating a user directly within the caller's tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    /// Email for the new user.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Password (plaintext, hashed here).
    pub password: String,
    /// Role to assign.
    pub role: UserRole,
    /// Projects the new user may act on.
    pub project_permissions: Vec<Uuid>,
}

/// Handles registration, login, and tenant user management.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Tenant repository.
    tenant_repo: Arc<TenantRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Project repository, for validating permission grants.
    project_repo: Arc<ProjectRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Access token encoder.
    encoder: Arc<JwtEncoder>,
    /// Role enforcer.
    enforcer: Arc<RoleEnforcer>,
}

impl AuthService {
    /// Creates a new auth service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tenant_repo: Arc<TenantRepository>,
        user_repo: Arc<UserRepository>,
        project_repo: Arc<ProjectRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        enforcer: Arc<RoleEnforcer>,
    ) -> Self {
        Self {
            tenant_repo,
            user_repo,
            project_repo,
            hasher,
            validator,
            encoder,
            enforcer,
        }
    }

    /// Registers a new tenant with its owner account and logs the owner in.
    ///
    /// The owner role cannot be obtained any other way. If the user insert
    /// fails after the tenant insert, the orphan tenant row stays behind; it
    /// owns no data and is unreachable without an owner.
    pub async fn register(&self, input: RegisterInput) -> Result<RegisterOutcome, AppError> {
        if let Some(existing) = self.user_repo.find_by_email(&input.email).await? {
            warn!(user_id = %existing.id, "Registration attempt with an existing email");
            return Err(AppError::conflict("Email already registered"));
        }

        self.validator.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let tenant = self
            .tenant_repo
            .create(&CreateTenant {
                name: input.tenant_name,
                description: input.tenant_description,
            })
            .await?;

        let owner = self
            .user_repo
            .create(&CreateUser {
                tenant_id: tenant.id,
                email: input.email,
                full_name: input.full_name,
                password_hash,
                role: UserRole::Owner,
                project_permissions: vec![],
            })
            .await?;

        let (access_token, expires_at) = self.encoder.issue_for_login(&owner)?;

        info!(tenant_id = %tenant.id, user_id = %owner.id, "Tenant registered");

        Ok(RegisterOutcome {
            tenant,
            owner,
            access_token,
            expires_at,
        })
    }

    /// Authenticates a user by email and password.
    ///
    /// An unknown email and a wrong password produce the same error, so the
    /// endpoint cannot be used to probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AppError::unauthenticated("Invalid email or password")),
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login attempt on a disabled account");
            return Err(AppError::unauthenticated("Account is disabled"));
        }

        let (access_token, expires_at) = self.encoder.issue_for_login(&user)?;

        info!(user_id = %user.id, tenant_id = %user.tenant_id, "User logged in");

        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }

    /// Returns the current user's profile.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a user inside the caller's tenant.
    ///
    /// Requires at least admin. The new role must not outrank the caller's
    /// and can never be owner, and every granted project must exist and be
    /// active in the tenant.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        input: CreateUserInput,
    ) -> Result<User, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        // The tenant owner exists from registration; a second one would hold
        // the implicit all-projects grant without having created the tenant.
        if input.role == UserRole::Owner {
            return Err(AppError::forbidden("The owner role cannot be granted"));
        }
        self.enforcer.require_minimum_role(&ctx.role, &input.role)?;

        self.check_projects_exist(ctx.tenant_id, &input.project_permissions)
            .await?;

        self.validator.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                tenant_id: ctx.tenant_id,
                email: input.email,
                full_name: input.full_name,
                password_hash,
                role: input.role,
                project_permissions: input.project_permissions,
            })
            .await?;

        info!(
            user_id = %user.id,
            tenant_id = %ctx.tenant_id,
            created_by = %ctx.user_id,
            role = %user.role,
            "User created"
        );

        Ok(user)
    }

    /// Lists users in the caller's tenant. Requires at least admin.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.enforcer
            .require_minimum_role(&ctx.role, &UserRole::Admin)?;
        self.user_repo
            .find_by_tenant(ctx.tenant_id, USER_LIST_LIMIT)
            .await
    }

    /// Verifies that every project id names an active project in the tenant.
    async fn check_projects_exist(
        &self,
        tenant_id: Uuid,
        project_ids: &[Uuid],
    ) -> Result<(), AppError> {
        for project_id in project_ids {
            if self
                .project_repo
                .find_active(tenant_id, *project_id)
                .await?
                .is_none()
            {
                return Err(AppError::invalid_reference(format!(
                    "Project {project_id} does not exist in this tenant"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use trackhub_auth::password::PasswordHasher;
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
    fn service() -> AuthService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        let config = auth_config();
        AuthService::new(
            Arc::new(TenantRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(ProjectRepository::new(pool)),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(RoleEnforcer::new()),
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

    fn input(role: UserRole) -> CreateUserInput {
        CreateUserInput {
            email: "new@acme.io".to_string(),
            full_name: "New User".to_string(),
            password: "pw1".to_string(),
            role,
            project_permissions: vec![],
        }
    }

    #[tokio::test]
    async fn owner_cannot_create_another_owner() {
        let err = service()
            .create_user(&ctx(UserRole::Owner), input(UserRole::Owner))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn developer_cannot_create_users() {
        let err = service()
            .create_user(&ctx(UserRole::Developer), input(UserRole::Developer))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn admin_cannot_create_a_role_above_their_own() {
        let err = service()
            .create_user(&ctx(UserRole::Admin), input(UserRole::Owner))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
