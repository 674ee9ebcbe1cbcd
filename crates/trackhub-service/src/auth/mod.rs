//! Registration, login, and tenant user management.

pub mod service;

pub use service::{AuthService, CreateUserInput, LoginOutcome, RegisterInput, RegisterOutcome};
