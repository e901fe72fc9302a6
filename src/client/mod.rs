//! # Auth client
//!
//! Everything that talks to the journal service. The core never calls in
//! here directly; it returns a `Command` and the event loop hands it to
//! [`dispatch::execute`] on a background task.

pub mod dispatch;
pub mod http;
pub mod memory;
pub mod service;
pub mod types;

pub use http::HttpAuthService;
pub use memory::{InMemoryUsers, LocalAuthService, UserRepository};
pub use service::{AuthService, ClientError};
pub use types::{LoginRequest, Session, SignupRequest};
