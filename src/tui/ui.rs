use crate::core::command::AuthKind;
use crate::core::state::{App, Page};
use crate::tui::component::Component;
use crate::tui::components::{AuthForm, InfoPage, Menu, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draws the whole screen for the current page.
///
/// Takes `&App`: the same state always draws the same frame, and nothing
/// measured here leaks into the next `update()`.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let username = app.session.as_ref().map(|s| s.username.as_str());
    TitleBar::new(app.page.title(), username, &app.status_message, app.clock)
        .render(frame, title_area);

    match app.page {
        Page::Login => {
            AuthForm::new(
                AuthKind::Login,
                &app.login,
                app.last_error.as_ref(),
                app.pending,
            )
            .render(frame, main_area);
        }
        Page::Signup => {
            AuthForm::new(
                AuthKind::Signup,
                &app.signup,
                app.last_error.as_ref(),
                app.pending,
            )
            .render(frame, main_area);
        }
        Page::Menu => Menu::new(username).render(frame, main_area),
        Page::Journal | Page::Read | Page::Settings | Page::Help => {
            if let Some(mut page) =
                InfoPage::for_page(app.page, app.session.as_ref(), &app.server_label)
            {
                page.render(frame, main_area);
            }
        }
    }
}
