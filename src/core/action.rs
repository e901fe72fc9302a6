//! # Actions
//!
//! Everything that can happen in Quill becomes an `Action`.
//! User presses Enter? That's `Action::KeyInput(Key::Enter)`.
//! Server accepts the password? That's `Action::LoginSucceeded(session)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state plus an `Effect` for the event loop to carry
//! out. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  (New State, Effect)
//! ```
//!
//! Page edges handled here:
//!
//! ```text
//!   Login ──Ctrl+S──▶ Signup ──Ctrl+L──▶ Login
//!   Login ──LoginSucceeded──▶ Menu ◀──SignupSucceeded── Signup
//!   Menu ──1..4──▶ Journal | Read | Settings | Help ──b / Esc──▶ Menu
//!   any ──Ctrl+C──▶ quit        Menu ──q──▶ quit
//! ```

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::client::Session;
use crate::core::command::{AuthKind, Command};
use crate::core::error::ErrorInfo;
use crate::core::form::FieldKind;
use crate::core::state::{App, Page, Viewport};
use crate::core::validate::validate;

/// A key press, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Control + letter, lowercase.
    Ctrl(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Esc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    KeyInput(Key),
    Resize { width: u16, height: u16 },
    Tick(DateTime<Local>),
    LoginSucceeded(Session),
    SignupSucceeded(Session),
    RequestFailed(ErrorInfo),
}

/// Follow-up work requested by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Run this command off the loop; its result comes back as an Action.
    Dispatch(Command),
}

pub fn update(mut app: App, action: Action) -> (App, Effect) {
    let effect = match action {
        Action::KeyInput(key) => handle_key(&mut app, key),
        Action::Resize { width, height } => {
            app.viewport = Viewport { width, height };
            Effect::None
        }
        Action::Tick(now) => {
            app.clock = Some(now);
            Effect::None
        }
        Action::LoginSucceeded(session) => authenticated(&mut app, AuthKind::Login, session),
        Action::SignupSucceeded(session) => authenticated(&mut app, AuthKind::Signup, session),
        Action::RequestFailed(error) => failed(&mut app, error),
    };
    (app, effect)
}

fn handle_key(app: &mut App, key: Key) -> Effect {
    if key == Key::Ctrl('c') {
        info!("Quit requested from {:?}", app.page);
        return Effect::Quit;
    }

    match app.page {
        Page::Login | Page::Signup => handle_form_key(app, key),
        Page::Menu => match key {
            Key::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                app.page = Page::MENU_ITEMS[index];
                Effect::None
            }
            Key::Char('q') => Effect::Quit,
            _ => Effect::None,
        },
        Page::Journal | Page::Read | Page::Settings | Page::Help => {
            if matches!(key, Key::Char('b') | Key::Esc) {
                app.page = Page::Menu;
            }
            Effect::None
        }
    }
}

fn handle_form_key(app: &mut App, key: Key) -> Effect {
    match (app.page, key) {
        (Page::Login, Key::Ctrl('s')) => switch_auth_page(app, Page::Signup),
        (Page::Signup, Key::Ctrl('l')) => switch_auth_page(app, Page::Login),
        (_, Key::Enter) => return submit(app),
        (_, key) => {
            let Some(form) = app.active_form_mut() else {
                return Effect::None;
            };
            match key {
                Key::Tab | Key::Down => form.focus_next(),
                Key::Up | Key::BackTab => form.focus_prev(),
                Key::Char(c) => {
                    if let Some(field) = form.focused_mut()
                        && !field.push(c)
                    {
                        debug!("{} is full, dropped {:?}", field.kind.label(), c);
                    }
                }
                Key::Backspace | Key::Delete => {
                    if let Some(field) = form.focused_mut() {
                        field.pop();
                    }
                }
                other => debug!("Unbound key on form: {:?}", other),
            }
        }
    }
    Effect::None
}

/// Login ↔ Signup. Both forms start over so nothing typed on one page
/// resurfaces on the other.
fn switch_auth_page(app: &mut App, to: Page) {
    debug!("Switching {:?} -> {:?}", app.page, to);
    app.login.reset();
    app.signup.reset();
    app.last_error = None;
    app.page = to;
}

fn submit(app: &mut App) -> Effect {
    if let Some(pending) = app.pending {
        warn!("Ignoring submit: {:?} request still in flight", pending);
        return Effect::None;
    }

    let kind = match app.page {
        Page::Login => AuthKind::Login,
        Page::Signup => AuthKind::Signup,
        _ => return Effect::None,
    };

    if kind == AuthKind::Signup {
        let form = &app.signup;
        if let Err(e) = validate(
            form.value(FieldKind::Username),
            form.value(FieldKind::Password),
            form.value(FieldKind::ConfirmPassword),
        ) {
            debug!("Signup rejected locally: {}", e);
            app.last_error = Some(e.into());
            return Effect::None;
        }
    }

    let form = if kind == AuthKind::Login {
        &app.login
    } else {
        &app.signup
    };
    let command = Command::submit(kind, form);

    info!("Submitting {:?}", kind);
    app.pending = Some(kind);
    app.last_error = None;
    app.status_message = format!("{}...", kind.label());
    Effect::Dispatch(command)
}

/// The page a flow's result belongs to.
fn flow_page(kind: AuthKind) -> Page {
    match kind {
        AuthKind::Login => Page::Login,
        AuthKind::Signup => Page::Signup,
    }
}

fn failed(app: &mut App, error: ErrorInfo) -> Effect {
    let in_flight = app.pending.take();
    if let Some(kind) = in_flight
        && app.page != flow_page(kind)
    {
        warn!(
            "{:?} failed but page is now {:?}; dropping error: {}",
            kind, app.page, error
        );
        return Effect::None;
    }

    warn!("Request failed: {}", error);
    app.status_message = String::from("Request failed");
    app.last_error = Some(error);
    Effect::None
}

fn authenticated(app: &mut App, kind: AuthKind, session: Session) -> Effect {
    app.pending = None;

    if app.page != flow_page(kind) {
        warn!(
            "{:?} succeeded but page is now {:?}; staying put",
            kind, app.page
        );
        return Effect::None;
    }

    info!("Authenticated as {} ({})", session.username, session.id);
    app.status_message = format!("Signed in as {}", session.username);
    app.session = Some(session);
    app.last_error = None;
    app.login.reset();
    app.signup.reset();
    app.page = Page::Menu;
    Effect::None
}
