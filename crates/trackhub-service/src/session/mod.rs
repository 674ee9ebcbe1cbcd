//! Tracked session lifecycle and queries.

pub mod service;

pub use service::{OpenSessionInput, SessionService};
