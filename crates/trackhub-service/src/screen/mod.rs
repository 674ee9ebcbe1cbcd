//! Screen registration and listing.

pub mod service;

pub use service::{RegisterScreenInput, ScreenService};
