//! Credential checks run on signup before any request goes out.

use std::fmt;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Password and confirmation differ.
    Mismatch,
    UsernameLength,
    PasswordLength,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Mismatch => write!(f, "Passwords do not match"),
            ValidationError::UsernameLength => write!(
                f,
                "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            ),
            ValidationError::PasswordLength => write!(
                f,
                "Password must be between {PASSWORD_MIN} and {PASSWORD_MAX} characters"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks signup credentials. Lengths are measured in characters.
///
/// Order matters: a mismatch is reported before any length problem.
pub fn validate(username: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::Mismatch);
    }

    let username_len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
        return Err(ValidationError::UsernameLength);
    }

    let password_len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&password_len) {
        return Err(ValidationError::PasswordLength);
    }

    Ok(())
}
