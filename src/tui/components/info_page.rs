//! # InfoPage Component
//!
//! Journal, Read, Settings and Help share one layout: a bordered box with a
//! title, a few lines of body text, and the way back to the menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::client::Session;
use crate::core::state::Page;
use crate::tui::component::Component;

const PAGE_WIDTH: u16 = 56;

pub struct InfoPage {
    pub title: &'static str,
    pub body: Vec<String>,
}

impl InfoPage {
    /// Builds the body for one of the sub-pages. Returns `None` for pages
    /// that have their own component.
    pub fn for_page(page: Page, session: Option<&Session>, server: &str) -> Option<Self> {
        let body = match page {
            Page::Journal => vec![
                "Write today's entry here.".to_string(),
                String::new(),
                "[Journal entries will appear here]".to_string(),
            ],
            Page::Read => vec![
                "Browse your past entries.".to_string(),
                String::new(),
                "[No entries yet]".to_string(),
            ],
            Page::Settings => {
                let mut body = match session {
                    Some(s) => vec![
                        format!("Signed in as {}", s.username),
                        format!("Contact:   {}", s.email),
                        format!("Account:   {}", s.id),
                    ],
                    None => vec!["Not signed in".to_string()],
                };
                body.push(String::new());
                body.push(format!("Server:    {server}"));
                body
            }
            Page::Help => [
                ("Tab / ↓", "next field"),
                ("↑ / Shift+Tab", "previous field"),
                ("Enter", "submit form"),
                ("Ctrl+S", "go to sign up (login page)"),
                ("Ctrl+L", "go to login (sign up page)"),
                ("1-4", "open a page (menu)"),
                ("b / Esc", "back to menu"),
                ("q", "quit (menu)"),
                ("Ctrl+C", "quit anywhere"),
            ]
            .iter()
            .map(|(keys, what)| format!("{keys:<15}{what}"))
            .collect(),
            Page::Login | Page::Signup | Page::Menu => return None,
        };
        Some(Self {
            title: page.title(),
            body,
        })
    }
}

impl Component for InfoPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = self.body.iter().map(|l| Line::raw(l.as_str())).collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "b. Back to Menu",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));

        // Borders take two rows
        let height = (lines.len() as u16 + 2).min(area.height);
        let [column] = Layout::horizontal([Constraint::Length(PAGE_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            body,
        );
    }
}
