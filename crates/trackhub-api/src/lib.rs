//! # trackhub-api
//!
//! HTTP API layer for TrackHub built on Axum.
//!
//! Two authentication paths coexist:
//!
//! - Dashboard endpoints take a bearer token through the
//!   [`extractors::AuthUser`] extractor, which re-reads the live user row.
//! - Ingestion endpoints take a device-credential header triple through
//!   [`extractors::DeviceCredential`], which yields a verified project
//!   binding instead of a user.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
