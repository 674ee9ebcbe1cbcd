//! # trackhub-auth
//!
//! Authentication and authorization for TrackHub.
//!
//! ## Modules
//!
//! - `jwt` — access-token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `rbac` — role hierarchy and project-scope enforcement
//! - `credential` — device-credential (header triple) verification
//! - `opaque` — random opaque token generation for invitations and screens

pub mod credential;
pub mod jwt;
pub mod opaque;
pub mod password;
pub mod rbac;

pub use credential::{CredentialVerifier, ProjectBinding};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RoleEnforcer;
