//! Project entity and platform enumeration.

pub mod model;
pub mod platform;

pub use model::{CreateProject, Project, UpdateProject};
pub use platform::Platform;
