//! Password policy enforcement for new passwords.

use trackhub_core::config::auth::AuthConfig;
use trackhub_core::error::AppError;

/// Validates new passwords against the configured policy.
///
/// The only mandatory rule is minimum length. The zxcvbn strength estimate
/// is opt-in via `password_strength_check`; with the shipped defaults any
/// non-empty password is accepted.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Whether to also require a zxcvbn score of at least 3.
    strength_check: bool,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            strength_check: config.password_strength_check,
        }
    }

    /// Validates a password, returning the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if self.strength_check {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(AppError::validation(
                    "Password is too weak; choose a longer or less predictable one",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_only() -> PasswordValidator {
        PasswordValidator {
            min_length: 1,
            strength_check: false,
        }
    }

    fn strict() -> PasswordValidator {
        PasswordValidator {
            min_length: 8,
            strength_check: true,
        }
    }

    #[test]
    fn test_default_policy_accepts_short_passwords() {
        assert!(length_only().validate("pw1").is_ok());
    }

    #[test]
    fn test_rejects_below_minimum_length() {
        assert!(strict().validate("abc").is_err());
    }

    #[test]
    fn test_strict_policy_rejects_predictable_passwords() {
        assert!(strict().validate("password123").is_err());
    }

    #[test]
    fn test_strict_policy_accepts_strong_passwords() {
        assert!(strict().validate("mallard-Quasar-7-brine").is_ok());
    }
}
