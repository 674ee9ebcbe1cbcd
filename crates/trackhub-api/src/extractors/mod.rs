//! Axum extractors for the two authentication paths.

pub mod auth;
pub mod device;

pub use auth::AuthUser;
pub use device::DeviceCredential;
