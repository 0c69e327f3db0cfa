//! Popup used while typing a new entry.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::draft::EntryDraft;

const PROMPT: &str = "Enter directory: ";
const PLACEHOLDER: &str = "/usr/bin";

/// Visual component that renders the entry popup over the bottom of the list.
#[derive(Debug, Default)]
pub struct EntryInput;

impl EntryInput {
    /// Draw the popup and place the terminal cursor inside the text.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, draft: &EntryDraft, insert_at: usize) {
        let width = area.width.saturating_sub(4).clamp(20, 80).min(area.width);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height.saturating_sub(5),
            width,
            height: 3.min(area.height),
        };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!("New entry at position {}", insert_at + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let body = if draft.is_empty() {
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(draft.value().to_string(), Style::default().fg(Color::White))
        };
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Gray)),
            body,
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        let offset = (PROMPT.chars().count() + draft.cursor()) as u16;
        let cursor_x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        frame.set_cursor(cursor_x, inner.y);
    }
}
