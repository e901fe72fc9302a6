//! # AuthForm Component
//!
//! The login and signup pages: a centered column with a title, one
//! `FormFieldView` per field, the submit hint, the page-switch hint and,
//! when present, the last error (wrapped to the column width).
//!
//! ```text
//!            🔐 Login
//!   ╭› Email──────────────────────╮
//!   │a@b.com                      │
//!   ╰─────────────────────────────╯
//!   ╭Password─────────────────────╮
//!   │•••••••                      │
//!   ╰─────────────────────────────╯
//!       Press Enter to submit
//!   Tab ↓ next · ↑ prev · Ctrl+C quit
//!
//!            First time?
//!      Press Ctrl+S to sign up
//!
//!   Error: Passwords do not match
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::command::AuthKind;
use crate::core::error::ErrorInfo;
use crate::core::form::Form;
use crate::tui::component::Component;
use crate::tui::components::form_field::{FIELD_HEIGHT, FormFieldView};

/// Preferred column width; shrinks with the terminal.
const FORM_WIDTH: u16 = 36;

pub struct AuthForm<'a> {
    pub kind: AuthKind,
    pub form: &'a Form,
    pub error: Option<&'a ErrorInfo>,
    /// Request currently in flight, if any.
    pub pending: Option<AuthKind>,
}

impl<'a> AuthForm<'a> {
    pub fn new(
        kind: AuthKind,
        form: &'a Form,
        error: Option<&'a ErrorInfo>,
        pending: Option<AuthKind>,
    ) -> Self {
        Self {
            kind,
            form,
            error,
            pending,
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            AuthKind::Login => "🔐 Login",
            AuthKind::Signup => "🔐 Sign Up",
        }
    }

    fn switch_hint(&self) -> [Line<'static>; 2] {
        let (lead, action) = match self.kind {
            AuthKind::Login => ("First time?", "Press Ctrl+S to sign up"),
            AuthKind::Signup => ("Already have an account?", "Press Ctrl+L to log in"),
        };
        [
            Line::from(Span::styled(
                lead,
                Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                action,
                Style::default().add_modifier(Modifier::UNDERLINED | Modifier::ITALIC),
            )),
        ]
    }

    fn footer_lines(&self, width: u16) -> Vec<Line<'static>> {
        let submit = match self.pending {
            Some(kind) => Line::from(Span::styled(
                format!("{}...", kind.label()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )),
            None => Line::from(Span::styled(
                " Press Enter to submit ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Indexed(99))
                    .add_modifier(Modifier::BOLD),
            )),
        };

        let mut lines = vec![
            submit,
            Line::from(Span::styled(
                "Tab ↓ next · ↑ prev · Ctrl+C quit",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            Line::raw(""),
        ];
        lines.extend(self.switch_hint());

        if let Some(error) = self.error {
            lines.push(Line::raw(""));
            let text = format!("Error: {error}");
            for part in textwrap::wrap(&text, width.max(1) as usize) {
                lines.push(Line::from(Span::styled(
                    part.into_owned(),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines
    }
}

impl Component for AuthForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = FORM_WIDTH.min(area.width);
        let footer = self.footer_lines(width);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(self.form.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(footer.len() as u16));

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let rows = Layout::vertical(constraints).flex(Flex::Center).split(column);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title(),
            Style::default()
                .fg(Color::Indexed(99))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        for (i, field) in self.form.fields().iter().enumerate() {
            FormFieldView::new(field).render(frame, rows[i + 1]);
        }

        let footer_area = rows[rows.len() - 1];
        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            footer_area,
        );
    }
}
