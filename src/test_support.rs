//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{AuthService, ClientError, LoginRequest, Session, SignupRequest};
use crate::core::action::{Action, Effect, Key, update};
use crate::core::state::{App, Viewport};

/// An auth service that answers every call with a canned result and
/// remembers what it was asked.
pub struct StubAuthService {
    result: Result<Session, ClientError>,
    pub calls: Mutex<Vec<String>>,
}

impl StubAuthService {
    pub fn ok(session: Session) -> Self {
        Self {
            result: Ok(session),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: ClientError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        self.calls.lock().unwrap().push(format!("login:{}", request.email));
        self.result.clone()
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session, ClientError> {
        self.calls.lock().unwrap().push(format!("signup:{}", request.email));
        self.result.clone()
    }
}

/// Creates a fresh App on an 80x24 viewport.
pub fn test_app() -> App {
    App::new(
        Viewport {
            width: 80,
            height: 24,
        },
        "http://localhost:8080",
    )
}

pub fn session(id: &str, email: &str, username: &str) -> Session {
    Session {
        id: id.to_string(),
        email: email.to_string(),
        username: username.to_string(),
    }
}

/// Feeds one key through `update`.
pub fn press(app: App, key: Key) -> (App, Effect) {
    update(app, Action::KeyInput(key))
}

/// Types each character of `text`, discarding effects.
pub fn type_text(app: App, text: &str) -> App {
    text.chars().fold(app, |app, c| press(app, Key::Char(c)).0)
}
