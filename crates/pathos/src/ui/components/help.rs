//! Key help overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::editor::Action;
use crate::ui::keymap::{KeyMap, describe};

/// Lists every bound action with its keys, in key-table order.
#[derive(Debug, Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, keymap: &KeyMap) {
        let lines = help_lines(keymap);
        let height = (lines.len() as u16 + 2).min(area.height);
        let width = 48.min(area.width);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Help")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(paragraph, popup);
    }
}

fn help_lines(keymap: &KeyMap) -> Vec<Line<'static>> {
    let mut seen: Vec<&Action> = Vec::new();
    let mut lines = Vec::new();
    for (_, action) in keymap.bindings() {
        if seen.contains(&action) {
            continue;
        }
        seen.push(action);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", keymap.keys_for(action)),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(describe(action)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "while entering: ↵ commit · esc cancel",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_distinct_action() {
        let keymap = KeyMap::default();
        let lines = help_lines(&keymap);
        let texts: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect();

        assert!(texts.iter().any(|text| text.starts_with("N ") && text.ends_with("Add directory at cursor")));
        assert!(texts.iter().any(|text| text.starts_with("j/↓ ") && text.ends_with("Move down")));
        assert_eq!(
            texts.iter().filter(|text| text.ends_with("Quit")).count(),
            1
        );
    }
}
