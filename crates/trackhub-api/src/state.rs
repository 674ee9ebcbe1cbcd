//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use trackhub_auth::credential::CredentialVerifier;
use trackhub_auth::jwt::{JwtDecoder, JwtEncoder};
use trackhub_auth::password::{PasswordHasher, PasswordValidator};
use trackhub_auth::rbac::RoleEnforcer;
use trackhub_core::config::AppConfig;

use trackhub_database::repositories::{
    EventRepository, InvitationRepository, ProjectRepository, ScreenRepository, SessionRepository,
    TenantRepository, UserRepository,
};

use trackhub_service::auth::AuthService;
use trackhub_service::invitation::InvitationService;
use trackhub_service::project::ProjectService;
use trackhub_service::screen::ScreenService;
use trackhub_service::session::SessionService;
use trackhub_service::tracking::TrackingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Device-credential verifier.
    pub credential_verifier: Arc<CredentialVerifier>,

    /// User repository, used by the auth extractor for the live re-read.
    pub user_repo: Arc<UserRepository>,

    /// Registration, login, and user management.
    pub auth_service: Arc<AuthService>,
    /// Invitation issuance and redemption.
    pub invitation_service: Arc<InvitationService>,
    /// Project management.
    pub project_service: Arc<ProjectService>,
    /// Screen registration.
    pub screen_service: Arc<ScreenService>,
    /// Tracked session lifecycle and queries.
    pub session_service: Arc<SessionService>,
    /// Event ingestion and queries.
    pub tracking_service: Arc<TrackingService>,
}

impl AppState {
    /// Wires repositories, the auth layer, and services into one state.
    pub fn initialize(config: AppConfig, db_pool: PgPool) -> Self {
        let tenant_repo = Arc::new(TenantRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
        let screen_repo = Arc::new(ScreenRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
        let invitation_repo = Arc::new(InvitationRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let enforcer = Arc::new(RoleEnforcer::new());
        let credential_verifier = Arc::new(CredentialVerifier::new(Arc::clone(&project_repo)));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&tenant_repo),
            Arc::clone(&user_repo),
            Arc::clone(&project_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&enforcer),
        ));

        let invitation_service = Arc::new(InvitationService::new(
            Arc::clone(&invitation_repo),
            Arc::clone(&user_repo),
            Arc::clone(&project_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&enforcer),
            &config.auth,
        ));

        let project_service = Arc::new(ProjectService::new(
            Arc::clone(&project_repo),
            Arc::clone(&enforcer),
        ));

        let screen_service = Arc::new(ScreenService::new(
            Arc::clone(&screen_repo),
            Arc::clone(&project_repo),
            Arc::clone(&enforcer),
        ));

        let session_service = Arc::new(SessionService::new(
            Arc::clone(&session_repo),
            Arc::clone(&enforcer),
            &config.auth,
        ));

        let tracking_service = Arc::new(TrackingService::new(
            Arc::clone(&event_repo),
            Arc::clone(&screen_repo),
            Arc::clone(&session_repo),
            Arc::clone(&enforcer),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            credential_verifier,
            user_repo,
            auth_service,
            invitation_service,
            project_service,
            screen_service,
            session_service,
            tracking_service,
        }
    }
}
