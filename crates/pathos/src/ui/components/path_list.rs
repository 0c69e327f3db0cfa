//! Path list component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::domain::model::{Classification, EntryRow};

const TITLE: &str = "PATHOS · manager of the PATH variable";

/// Foreground colour for a classification. Normal rows keep the terminal default.
pub fn classification_style(classification: Classification) -> Style {
    match classification {
        Classification::Normal => Style::default(),
        Classification::Missing => Style::default().fg(Color::Red),
        Classification::Duplicate => Style::default().fg(Color::Blue),
        Classification::MissingAndDuplicate => Style::default().fg(Color::Magenta),
    }
}

/// Plain-text form of a row, `N. <entry>`, one-based.
pub fn row_label(index: usize, row: &EntryRow) -> String {
    format!("{}. {}", index + 1, row.text)
}

/// Ratatui component responsible for rendering the numbered path list.
#[derive(Debug, Default)]
pub struct PathListView;

impl PathListView {
    /// Render `rows` into `area`, keeping the selected row in view.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, rows: &[EntryRow], has_focus: bool) {
        let border_color = if has_focus {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(TITLE);

        if rows.is_empty() {
            let placeholder = Paragraph::new("No entries · press N to add one")
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let width = rows.len().to_string().len();
        let items: Vec<ListItem<'_>> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let number = format!("{:>width$}. ", index + 1, width = width);
                let line = Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        display_text(&row.text),
                        classification_style(row.classification),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(rows.iter().position(|row| row.is_selected));

        let highlight_style = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn display_text(text: &str) -> String {
    if text.is_empty() {
        "(empty)".to_string()
    } else {
        text.to_string()
    }
}
