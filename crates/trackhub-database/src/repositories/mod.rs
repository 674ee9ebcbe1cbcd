//! Repository implementations, one per logical table.

pub mod event;
pub mod invitation;
pub mod project;
pub mod screen;
pub mod session;
pub mod tenant;
pub mod user;

pub use event::EventRepository;
pub use invitation::InvitationRepository;
pub use project::ProjectRepository;
pub use screen::ScreenRepository;
pub use session::SessionRepository;
pub use tenant::TenantRepository;
pub use user::UserRepository;
