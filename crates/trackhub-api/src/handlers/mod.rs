//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod health;
pub mod invitation;
pub mod project;
pub mod screen;
pub mod session;
pub mod tracking;
pub mod user;

use trackhub_core::error::AppError;
use validator::Validate;

/// Runs declarative DTO validation, mapping failures to the domain error.
pub(crate) fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
