//! # FormField Component
//!
//! A single bordered input box. The label is the border title; the focused
//! field gets a highlighted border and a `›` marker so focus is visible even
//! without colors.
//!
//! Masking happens here and only here: the stored value is raw text, the
//! rendered value is one `•` per character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::form::FormField;
use crate::tui::component::Component;

pub const MASK_CHAR: char = '•';
pub const FOCUS_MARKER: &str = "› ";

/// Borders (2) plus one content line.
pub const FIELD_HEIGHT: u16 = 3;

pub struct FormFieldView<'a> {
    pub field: &'a FormField,
}

impl<'a> FormFieldView<'a> {
    pub fn new(field: &'a FormField) -> Self {
        Self { field }
    }
}

/// The text shown for a field: masked if needed, and clipped from the left
/// so the end of the value (where typing happens) stays visible in `width`
/// columns.
pub fn display_value(field: &FormField, width: u16) -> String {
    let shown: String = if field.masked {
        field.value.chars().map(|_| MASK_CHAR).collect()
    } else {
        field.value.clone()
    };

    let width = width as usize;
    let mut used = 0usize;
    let mut tail: Vec<char> = Vec::new();
    for c in shown.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

impl Component for FormFieldView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (border_style, marker) = if self.field.focused {
            (
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
                FOCUS_MARKER,
            )
        } else {
            (Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM), "")
        };

        let title = format!("{}{}", marker, self.field.kind.label());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);

        let inner_width = area.width.saturating_sub(2);
        let value = display_value(self.field, inner_width);
        let cursor_offset = value
            .chars()
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum::<u16>();
        let paragraph = Paragraph::new(Line::from(Span::raw(value))).block(block);
        frame.render_widget(paragraph, area);

        if self.field.focused {
            let x = (area.x + 1 + cursor_offset).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
