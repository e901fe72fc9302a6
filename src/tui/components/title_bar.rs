//! # TitleBar Component
//!
//! Top status bar: application name, current page, who is signed in, the
//! status message, and the clock from the last tick.
//!
//! ## Conditional Formatting
//!
//! 1. **Signed in**: `"Quill · Menu · alice | Signed in as alice      14:02"`
//! 2. **Signed out**: `"Quill · Login | Welcome to Quill!             14:02"`
//!
//! The clock is right-aligned and dropped first when the terminal is too
//! narrow for everything.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub page_title: &'a str,
    pub username: Option<&'a str>,
    pub status_message: &'a str,
    pub clock: Option<DateTime<Local>>,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        page_title: &'a str,
        username: Option<&'a str>,
        status_message: &'a str,
        clock: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            page_title,
            username,
            status_message,
            clock,
        }
    }

    fn left_text(&self) -> String {
        let mut text = format!("Quill · {}", self.page_title);
        if let Some(user) = self.username {
            text.push_str(" · ");
            text.push_str(user);
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(self.status_message);
        }
        text
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let clock = self
            .clock
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();

        let free = (area.width as usize).saturating_sub(left.width());
        let mut spans = vec![Span::styled(
            left,
            Style::default().fg(Color::Indexed(99)).add_modifier(Modifier::BOLD),
        )];
        // Clock only if it fits with at least one space of padding
        if !clock.is_empty() && free > clock.width() {
            spans.push(Span::raw(" ".repeat(free - clock.width())));
            spans.push(Span::styled(clock, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
