//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns `App`. Each turn it:
//!
//! 1. draws the current state (only if something changed),
//! 2. waits up to `POLL_INTERVAL` for terminal input and drains whatever is queued,
//! 3. drains results from background commands,
//! 4. emits a `Tick` once a second for the clock.
//!
//! Every action goes through `update()`; an `Effect::Dispatch` spawns the
//! command on a tokio task that sends exactly one `Action` back through the
//! channel. The loop never awaits network I/O itself.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;

use crate::client::AuthService;
use crate::client::dispatch;
use crate::core::action::{Action, Effect, update};
use crate::core::command::Command;
use crate::core::state::{App, Viewport};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Runs the UI until the user quits. Must be called inside a tokio runtime.
pub fn run(service: Arc<dyn AuthService>, server_label: String) -> std::io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard = ok_or_warn("set terminal modes", TerminalModeGuard::new());

    let size = restore_on_err(terminal.size(), ratatui::restore)?;
    let mut app = App::new(
        Viewport {
            width: size.width,
            height: size.height,
        },
        server_label,
    );
    info!("Using {} auth service", service.name());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut last_tick: Option<Instant> = None;
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if last_tick.is_none_or(|t| t.elapsed() >= TICK_INTERVAL) {
            last_tick = Some(Instant::now());
            let clock_before = app.clock.map(|c| c.format("%H:%M").to_string());
            app = update(app, Action::Tick(chrono::Local::now())).0;
            // Redraw only when the displayed minute changes
            if app.clock.map(|c| c.format("%H:%M").to_string()) != clock_before {
                needs_redraw = true;
            }
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Terminal input: first event (bounded wait) plus everything already queued
        let mut should_quit = false;
        let first_event = poll_event_timeout(POLL_INTERVAL);
        for action in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let (next, quit) = apply(app, action, &service, &tx);
            app = next;
            if quit {
                should_quit = true;
                break;
            }
        }

        // Results from background commands
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let (next, quit) = apply(app, action, &service, &tx);
            app = next;
            should_quit |= quit;
        }

        if should_quit {
            info!("Shutting down");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

/// Keeps the value, or logs the failure and carries on without it.
fn ok_or_warn<T>(what: &str, result: std::io::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to {}: {}", what, e);
            None
        }
    }
}

/// Runs `restore` before handing an error back, so an early return after
/// `ratatui::try_init` does not leave the terminal in raw mode.
fn restore_on_err<T>(result: std::io::Result<T>, restore: impl FnOnce()) -> std::io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Feeds one action through `update` and carries out the effect.
/// The returned flag is true if the loop should stop.
fn apply(
    app: App,
    action: Action,
    service: &Arc<dyn AuthService>,
    tx: &mpsc::Sender<Action>,
) -> (App, bool) {
    let (app, effect) = update(app, action);
    let quit = match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Dispatch(command) => {
            spawn_command(command, service.clone(), tx.clone());
            false
        }
    };
    (app, quit)
}

/// Runs `command` on its own task. The task owns copies of everything it
/// needs and reports back with exactly one `Action`.
fn spawn_command(command: Command, service: Arc<dyn AuthService>, tx: mpsc::Sender<Action>) {
    info!("Spawning {:?} command", command.kind());
    tokio::spawn(async move {
        let action = dispatch::execute(service.as_ref(), command).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver command result: receiver dropped");
        }
    });
}
