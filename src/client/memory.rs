//! # Offline auth service
//!
//! An `AuthService` backed by an injected `UserRepository` instead of the
//! network. Used by `--offline` and by tests that need a service that really
//! remembers signups.
//!
//! Failures are reported the same way the HTTP service reports them
//! (`ClientError::Api` with a status line) so the UI cannot tell the two apart.
//!
//! Passwords are kept as given. This is a development stand-in, not a store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use log::{debug, info};

use super::service::{AuthService, ClientError};
use super::types::{LoginRequest, Session, SignupRequest};

/// Storage seam for user records.
pub trait UserRepository: Send + Sync {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<Session>;

    /// Fails with a readable reason if the email is already taken.
    fn create(&self, username: &str, email: &str, password: &str) -> Result<Session, String>;
}

struct UserRecord {
    session: Session,
    password: String,
}

/// Users keyed by email.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding the two demo accounts, both with password `test123`.
    pub fn with_demo_users() -> Self {
        let repo = Self::new();
        for (username, email) in [("alice", "alice@example.com"), ("bob", "bob@example.com")] {
            let _ = repo.create(username, email, "test123");
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUsers {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<Session> {
        let users = self.users.lock().ok()?;
        users
            .get(email)
            .filter(|record| record.password == password)
            .map(|record| record.session.clone())
    }

    fn create(&self, username: &str, email: &str, password: &str) -> Result<Session, String> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| "user store unavailable".to_string())?;
        if users.contains_key(email) {
            return Err(format!("an account for {email} already exists"));
        }
        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            username: username.to_string(),
        };
        users.insert(
            email.to_string(),
            UserRecord {
                session: session.clone(),
                password: password.to_string(),
            },
        );
        Ok(session)
    }
}

/// `AuthService` over any `UserRepository`.
pub struct LocalAuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> LocalAuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[async_trait]
impl<R: UserRepository> AuthService for LocalAuthService<R> {
    fn name(&self) -> &str {
        "offline"
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        debug!("Offline login for {}", request.email);
        self.repo
            .find_by_credentials(&request.email, &request.password)
            .ok_or_else(|| ClientError::Api {
                status: 401,
                status_line: "401 Unauthorized".to_string(),
                message: "Invalid credentials".to_string(),
            })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session, ClientError> {
        let session = self
            .repo
            .create(&request.username, &request.email, &request.password)
            .map_err(|message| ClientError::Api {
                status: 409,
                status_line: "409 Conflict".to_string(),
                message,
            })?;
        info!("Offline signup created user {}", session.id);
        Ok(session)
    }
}
