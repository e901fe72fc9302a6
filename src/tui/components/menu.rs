//! # Menu Component
//!
//! The page shown after signing in: a welcome line and the numbered list of
//! pages. Stateless; the number keys are interpreted by `core::action`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Page;
use crate::tui::component::Component;

pub struct Menu<'a> {
    pub username: Option<&'a str>,
}

impl<'a> Menu<'a> {
    pub fn new(username: Option<&'a str>) -> Self {
        Self { username }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let welcome = match self.username {
            Some(name) => format!("Welcome, {name}"),
            None => String::from("Welcome"),
        };

        let mut lines = vec![
            Line::from(Span::styled(welcome, Style::default().fg(Color::Cyan))),
            Line::raw(""),
            Line::from(Span::styled(
                "Menu",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];
        lines.extend(
            Page::MENU_ITEMS
                .iter()
                .enumerate()
                .map(|(i, page)| Line::raw(format!("{}. {}", i + 1, page.title()))),
        );
        lines.push(Line::raw("q. Quit"));
        lines
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [body] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}
