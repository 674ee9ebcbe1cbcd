//! Configuration loading tests against the shipped default files.

use trackhub_core::config::AppConfig;

#[test]
fn default_configuration_loads() {
    let config = AppConfig::load("development").expect("default config should load");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.auth.access_ttl_minutes, 30);
    assert_eq!(config.auth.invitation_ttl_days, 7);
    assert_eq!(config.auth.session_ttl_hours, 24);
    assert!(config.database.url.starts_with("postgres://"));
}

#[test]
fn default_password_policy_is_length_only() {
    // Any non-empty password registers; the zxcvbn estimate is opt-in.
    let config = AppConfig::load("development").expect("default config should load");
    assert_eq!(config.auth.password_min_length, 1);
    assert!(!config.auth.password_strength_check);
}

#[test]
fn default_jwt_secret_is_a_placeholder() {
    // Deployments must override this through the environment.
    let config = AppConfig::load("development").expect("default config should load");
    assert_eq!(config.auth.jwt_secret, "CHANGE_ME_IN_PRODUCTION");
}
