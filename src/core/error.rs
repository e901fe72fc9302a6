//! # User-facing errors
//!
//! Everything that can end up in `App::last_error`. All of these are
//! recoverable: they are shown to the user, never change the page, and never
//! clear what the user typed.

use std::fmt;

use crate::client::ClientError;
use crate::core::validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorInfo {
    /// Rejected locally before any request was made.
    Validation(ValidationError),
    /// Connection failure or timeout.
    Transport(String),
    /// Unexpected status or undecodable body.
    Protocol {
        /// Status line such as `401 Unauthorized`, when the server sent one.
        status: Option<String>,
        message: String,
    },
}

impl ErrorInfo {
    pub fn status(&self) -> Option<&str> {
        match self {
            ErrorInfo::Protocol { status, .. } => status.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorInfo::Validation(e) => write!(f, "{e}"),
            ErrorInfo::Transport(msg) => write!(f, "Could not reach server: {msg}"),
            ErrorInfo::Protocol {
                status: Some(status),
                message,
            } if message.is_empty() => write!(f, "Server returned {status}"),
            ErrorInfo::Protocol {
                status: Some(status),
                message,
            } => write!(f, "Server returned {status}: {message}"),
            ErrorInfo::Protocol {
                status: None,
                message,
            } => write!(f, "Unexpected server response: {message}"),
        }
    }
}

impl std::error::Error for ErrorInfo {}

impl From<ValidationError> for ErrorInfo {
    fn from(e: ValidationError) -> Self {
        ErrorInfo::Validation(e)
    }
}

impl From<ClientError> for ErrorInfo {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Config(msg) | ClientError::Network(msg) => ErrorInfo::Transport(msg),
            ClientError::Api {
                status_line,
                message,
                ..
            } => ErrorInfo::Protocol {
                status: Some(status_line),
                message,
            },
            ClientError::Parse(msg) => ErrorInfo::Protocol {
                status: None,
                message: msg,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_line() {
        let info = ErrorInfo::from(ClientError::Api {
            status: 401,
            status_line: "401 Unauthorized".to_string(),
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(info.status(), Some("401 Unauthorized"));
        assert_eq!(info.to_string(), "Server returned 401 Unauthorized: Invalid credentials");
    }

    #[test]
    fn test_empty_body_omits_message() {
        let info = ErrorInfo::Protocol {
            status: Some("500 Internal Server Error".to_string()),
            message: String::new(),
        };
        assert_eq!(info.to_string(), "Server returned 500 Internal Server Error");
    }

    #[test]
    fn test_network_maps_to_transport() {
        let info = ErrorInfo::from(ClientError::Network("connection refused".to_string()));
        assert_eq!(info, ErrorInfo::Transport("connection refused".to_string()));
        assert_eq!(info.status(), None);
    }

    #[test]
    fn test_parse_maps_to_protocol_without_status() {
        let info = ErrorInfo::from(ClientError::Parse("expected value".to_string()));
        assert!(matches!(info, ErrorInfo::Protocol { status: None, .. }));
    }

    #[test]
    fn test_validation_display_is_plain() {
        let info = ErrorInfo::from(ValidationError::Mismatch);
        assert_eq!(info.to_string(), "Passwords do not match");
    }
}
