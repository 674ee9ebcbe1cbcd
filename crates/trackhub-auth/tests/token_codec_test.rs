//! Access-token codec behavior: issuance, validation, expiry, tampering.

use chrono::{Duration, Utc};
use uuid::Uuid;

use trackhub_auth::jwt::{JwtDecoder, JwtEncoder};
use trackhub_core::config::auth::AuthConfig;
use trackhub_core::error::ErrorKind;
use trackhub_entity::user::{User, UserRole};

fn test_config(secret: &str) -> AuthConfig {
    AuthConfig {
        jwt_secret: secret.to_string(),
        access_ttl_minutes: 30,
        invitation_ttl_days: 7,
        session_ttl_hours: 24,
        password_min_length: 8,
        password_strength_check: false,
    }
}

fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        email: "a@acme.io".to_string(),
        full_name: "Acme Owner".to_string(),
        password_hash: String::new(),
        role: UserRole::Owner,
        project_permissions: vec![Uuid::new_v4()],
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn issued_token_decodes_back_to_the_same_subject() {
    let config = test_config("unit-test-secret");
    let encoder = JwtEncoder::new(&config);
    let decoder = JwtDecoder::new(&config);
    let user = test_user();

    let (token, expires_at) = encoder.issue_for_login(&user).unwrap();
    let claims = decoder.decode(&token).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.tenant_id, user.tenant_id);
    assert_eq!(claims.role, UserRole::Owner);
    assert_eq!(claims.projects, user.project_permissions);
    assert_eq!(claims.exp, expires_at.timestamp());
    assert!(expires_at > Utc::now() + Duration::minutes(29));
}

#[test]
fn expired_token_is_rejected_even_with_a_valid_signature() {
    let config = test_config("unit-test-secret");
    let encoder = JwtEncoder::new(&config);
    let decoder = JwtDecoder::new(&config);

    // Signed with the right key, but already past exp (beyond leeway).
    let (token, _) = encoder
        .issue(&test_user(), Some(Duration::minutes(-1)))
        .unwrap();

    let err = decoder.decode(&token).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[test]
fn token_signed_with_a_different_key_is_rejected() {
    let encoder = JwtEncoder::new(&test_config("key-one"));
    let decoder = JwtDecoder::new(&test_config("key-two"));

    let (token, _) = encoder.issue_for_login(&test_user()).unwrap();
    let err = decoder.decode(&token).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[test]
fn garbage_token_is_rejected() {
    let decoder = JwtDecoder::new(&test_config("unit-test-secret"));
    for junk in ["", "not-a-jwt", "a.b.c", "eyJ.eyJ.sig"] {
        let err = decoder.decode(junk).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}

#[test]
fn default_ttl_is_fifteen_minutes_when_unspecified() {
    let encoder = JwtEncoder::new(&test_config("unit-test-secret"));
    let (_, expires_at) = encoder.issue(&test_user(), None).unwrap();

    let remaining = expires_at - Utc::now();
    assert!(remaining <= Duration::minutes(15));
    assert!(remaining > Duration::minutes(14));
}
