//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use trackhub_core::config::auth::AuthConfig;
use trackhub_core::error::AppError;
use trackhub_entity::user::User;

use super::claims::Claims;

/// TTL applied when the caller does not name one.
const DEFAULT_TTL_MINUTES: i64 = 15;

/// Creates signed JWT access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL applied at login.
    login_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("login_ttl", &self.login_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            login_ttl: Duration::minutes(config.access_ttl_minutes as i64),
        }
    }

    /// Issues an access token for the given user.
    ///
    /// `ttl` falls back to 15 minutes when not supplied; the login path
    /// passes the configured login TTL explicitly.
    pub fn issue(
        &self,
        user: &User,
        ttl: Option<Duration>,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TTL_MINUTES));

        let claims = Claims {
            sub: user.id,
            tenant_id: user.tenant_id,
            role: user.role,
            projects: user.project_permissions.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }

    /// Issues an access token with the login TTL.
    pub fn issue_for_login(&self, user: &User) -> Result<(String, DateTime<Utc>), AppError> {
        self.issue(user, Some(self.login_ttl))
    }
}
