//! Event ingestion and queries.

pub mod service;

pub use service::{EventQueryInput, TrackEventInput, TrackScreenInput, TrackingService};
