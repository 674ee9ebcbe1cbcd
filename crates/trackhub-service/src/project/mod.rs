//! Project management.

pub mod service;

pub use service::{CreateProjectInput, ProjectService};
