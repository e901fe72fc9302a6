//! # Application State
//!
//! Core business state for Quill. This module contains domain logic only -
//! no TUI-specific types.
//!
//! ```text
//! App
//! ├── page: Page                     // exactly one current page
//! ├── login: Form                    // email, password
//! ├── signup: Form                   // username, email, password, confirm
//! ├── session: Option<Session>       // set after login/signup succeeds
//! ├── last_error: Option<ErrorInfo>  // shown under the form
//! ├── pending: Option<AuthKind>      // request in flight
//! ├── viewport: Viewport             // terminal size
//! ├── clock: Option<DateTime>        // last tick
//! └── status_message: String         // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Local};

use crate::client::Session;
use crate::core::command::AuthKind;
use crate::core::error::ErrorInfo;
use crate::core::form::Form;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Signup,
    Menu,
    Journal,
    Read,
    Settings,
    Help,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Signup => "Sign Up",
            Page::Menu => "Menu",
            Page::Journal => "Journal",
            Page::Read => "Read",
            Page::Settings => "Settings",
            Page::Help => "Help",
        }
    }

    /// Pages reachable from the menu by digit, in menu order.
    pub const MENU_ITEMS: [Page; 4] = [Page::Journal, Page::Read, Page::Settings, Page::Help];

    pub fn is_auth(&self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub page: Page,
    pub login: Form,
    pub signup: Form,
    pub session: Option<Session>,
    pub last_error: Option<ErrorInfo>,
    /// Set while a command is in flight; Enter is ignored until it resolves.
    pub pending: Option<AuthKind>,
    pub viewport: Viewport,
    pub clock: Option<DateTime<Local>>,
    pub status_message: String,
    /// Where requests go, for display on the settings page.
    pub server_label: String,
}

impl App {
    pub fn new(viewport: Viewport, server_label: impl Into<String>) -> Self {
        Self {
            page: Page::Login,
            login: Form::login(),
            signup: Form::signup(),
            session: None,
            last_error: None,
            pending: None,
            viewport,
            clock: None,
            status_message: String::from("Welcome to Quill!"),
            server_label: server_label.into(),
        }
    }

    /// The form belonging to the current page, if it has one.
    pub fn active_form(&self) -> Option<&Form> {
        match self.page {
            Page::Login => Some(&self.login),
            Page::Signup => Some(&self.signup),
            _ => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.page {
            Page::Login => Some(&mut self.login),
            Page::Signup => Some(&mut self.signup),
            _ => None,
        }
    }
}
