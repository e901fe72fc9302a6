use std::fmt;

use async_trait::async_trait;

use super::types::{LoginRequest, Session, SignupRequest};

/// Errors that can occur while talking to the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Client misconfigured (bad base URL, TLS backend unavailable).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with an unexpected status.
    Api {
        status: u16,
        /// e.g. `401 Unauthorized`
        status_line: String,
        message: String,
    },
    /// The success body was not a session.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(msg) => write!(f, "config error: {msg}"),
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api {
                status_line,
                message,
                ..
            } => write!(f, "server returned status: {status_line}, message: {message}"),
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// The remote journal service, as far as authentication goes.
///
/// The event loop only ever holds an `Arc<dyn AuthService>`, so the HTTP client
/// and the in-memory store are interchangeable.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError>;

    async fn signup(&self, request: &SignupRequest) -> Result<Session, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_line() {
        let err = ClientError::Api {
            status: 401,
            status_line: "401 Unauthorized".to_string(),
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server returned status: 401 Unauthorized, message: Invalid credentials"
        );
    }

    #[test]
    fn test_network_error_display() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
