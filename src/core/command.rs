//! # Commands
//!
//! A `Command` describes network work the event loop should start. It is
//! built from a form at submission time, handed to the loop inside
//! `Effect::Dispatch`, and then forgotten: state never holds one and nothing
//! re-issues it.

use crate::client::{LoginRequest, SignupRequest};
use crate::core::form::{FieldKind, Form};

/// Which auth flow a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Signup,
}

impl AuthKind {
    pub fn label(&self) -> &'static str {
        match self {
            AuthKind::Login => "Signing in",
            AuthKind::Signup => "Creating account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl Command {
    /// Copies the relevant field values out of `form` into a request.
    pub fn submit(kind: AuthKind, form: &Form) -> Self {
        match kind {
            AuthKind::Login => Command::Login(LoginRequest {
                email: form.value(FieldKind::Email).to_string(),
                password: form.value(FieldKind::Password).to_string(),
            }),
            AuthKind::Signup => Command::Signup(SignupRequest {
                username: form.value(FieldKind::Username).to_string(),
                email: form.value(FieldKind::Email).to_string(),
                password: form.value(FieldKind::Password).to_string(),
            }),
        }
    }

    pub fn kind(&self) -> AuthKind {
        match self {
            Command::Login(_) => AuthKind::Login,
            Command::Signup(_) => AuthKind::Signup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut Form, values: &[&str]) {
        for value in values {
            if let Some(field) = form.focused_mut() {
                value.chars().for_each(|c| {
                    field.push(c);
                });
            }
            form.focus_next();
        }
    }

    #[test]
    fn test_submit_login_copies_fields() {
        let mut form = Form::login();
        fill(&mut form, &["a@b.com", "secret1"]);
        assert_eq!(
            Command::submit(AuthKind::Login, &form),
            Command::Login(LoginRequest {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
        );
    }

    #[test]
    fn test_submit_signup_drops_confirmation() {
        let mut form = Form::signup();
        fill(&mut form, &["alice", "a@b.com", "secret1", "secret1"]);
        let command = Command::submit(AuthKind::Signup, &form);
        assert_eq!(command.kind(), AuthKind::Signup);
        assert_eq!(
            command,
            Command::Signup(SignupRequest {
                username: "alice".to_string(),
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
        );
    }
}
