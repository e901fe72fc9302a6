//! Runs a `Command` against an `AuthService` and folds the outcome into the
//! single `Action` the event loop will receive for it.

use log::{info, warn};

use crate::core::action::Action;
use crate::core::command::Command;
use crate::core::error::ErrorInfo;

use super::service::AuthService;

pub async fn execute(service: &dyn AuthService, command: Command) -> Action {
    let kind = command.kind();
    let result = match &command {
        Command::Login(request) => service.login(request).await,
        Command::Signup(request) => service.signup(request).await,
    };

    match (command, result) {
        (Command::Login(_), Ok(session)) => {
            info!("{} login ok for {}", service.name(), session.email);
            Action::LoginSucceeded(session)
        }
        (Command::Signup(_), Ok(session)) => {
            info!("{} signup ok for {}", service.name(), session.email);
            Action::SignupSucceeded(session)
        }
        (_, Err(e)) => {
            warn!("{} {:?} failed: {}", service.name(), kind, e);
            Action::RequestFailed(ErrorInfo::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, LoginRequest, SignupRequest};
    use crate::test_support::{StubAuthService, session};

    fn login_command() -> Command {
        Command::Login(LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        })
    }

    #[tokio::test]
    async fn test_login_success_becomes_login_succeeded() {
        let service = StubAuthService::ok(session("1", "a@b.com", "a"));
        let action = execute(&service, login_command()).await;
        assert_eq!(action, Action::LoginSucceeded(session("1", "a@b.com", "a")));
        assert_eq!(service.calls(), vec!["login:a@b.com".to_string()]);
    }

    #[tokio::test]
    async fn test_signup_success_becomes_signup_succeeded() {
        let service = StubAuthService::ok(session("2", "b@c.com", "bee"));
        let command = Command::Signup(SignupRequest {
            username: "bee".to_string(),
            email: "b@c.com".to_string(),
            password: "secret1".to_string(),
        });
        let action = execute(&service, command).await;
        assert!(matches!(action, Action::SignupSucceeded(s) if s.username == "bee"));
    }

    #[tokio::test]
    async fn test_failure_becomes_request_failed() {
        let service = StubAuthService::err(ClientError::Network("connection refused".into()));
        let action = execute(&service, login_command()).await;
        assert_eq!(
            action,
            Action::RequestFailed(ErrorInfo::Transport("connection refused".into()))
        );
    }
}
