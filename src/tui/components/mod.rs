//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless: it borrows what it needs from `App`
//! as props, renders, and is dropped at the end of the frame.
//!
//! - `TitleBar`: Top status bar showing page, user, status and clock
//! - `FormFieldView`: One bordered input, masked and focus-marked
//! - `AuthForm`: Login and signup pages, built from `FormFieldView`s
//! - `Menu`: Numbered page list after sign-in
//! - `InfoPage`: Journal, Read, Settings and Help
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(app.page.title(), username, &app.status_message, app.clock).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! title_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── form_field.rs    (Single input box + masking)
//! ├── auth_form.rs     (Login / signup pages)
//! ├── menu.rs          (Menu page)
//! └── info_page.rs     (Journal / Read / Settings / Help)
//! ```

pub mod auth_form;
pub mod form_field;
pub mod info_page;
pub mod menu;
mod title_bar;

pub use auth_form::AuthForm;
pub use form_field::FormFieldView;
pub use info_page::InfoPage;
pub use menu::Menu;
pub use title_bar::TitleBar;
