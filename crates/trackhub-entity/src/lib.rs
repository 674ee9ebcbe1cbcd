//! # trackhub-entity
//!
//! Domain entities for TrackHub. Every entity except [`tenant::Tenant`]
//! carries a `tenant_id`; the tenant is the root of isolation and no
//! cross-tenant read or write is ever permitted.

pub mod event;
pub mod invitation;
pub mod project;
pub mod screen;
pub mod session;
pub mod tenant;
pub mod user;

pub use event::Event;
pub use invitation::Invitation;
pub use project::{Platform, Project};
pub use screen::Screen;
pub use session::{TimeRange, TrackedSession};
pub use tenant::Tenant;
pub use user::{User, UserRole};
