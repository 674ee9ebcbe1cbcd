//! # trackhub-service
//!
//! Business logic services for TrackHub. Each service orchestrates
//! repositories and the auth layer; HTTP concerns live in `trackhub-api`.
//!
//! Dashboard services take a [`context::RequestContext`] resolved from a
//! bearer token. Ingestion services take a verified
//! [`trackhub_auth::ProjectBinding`] instead; no user principal exists on
//! that path.

pub mod auth;
pub mod context;
pub mod invitation;
pub mod project;
pub mod screen;
pub mod session;
pub mod tracking;

pub use context::RequestContext;
