//! # Core Application Logic
//!
//! This module contains Quill's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Dispatch(Command)
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── spawn_command ──────▶ │   client   │
//!     │  Adapter   │ ◀──── Action ─────────── │ (reqwest)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`command`]: Network work requested by `update()`
//! - [`form`]: Form fields and focus cycling
//! - [`validate`]: Signup credential checks
//! - [`error`]: Errors shown to the user
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod command;
pub mod config;
pub mod error;
pub mod form;
pub mod state;
pub mod validate;
