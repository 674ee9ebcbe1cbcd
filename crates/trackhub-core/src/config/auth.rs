//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Loaded once at startup. There is no key-rollover grace period: rotating
/// `jwt_secret` invalidates every outstanding access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes, applied at login.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Invitation token lifetime in days.
    #[serde(default = "default_invitation_ttl")]
    pub invitation_ttl_days: u64,
    /// Tracked device session lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Whether to additionally require a zxcvbn strength estimate.
    /// Off by default; length is the only mandatory policy.
    #[serde(default)]
    pub password_strength_check: bool,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_invitation_ttl() -> u64 {
    7
}

fn default_session_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    1
}
