//! Colour legend with per-category counts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::model::{Classification, ListSummary};
use crate::ui::components::path_list::classification_style;

/// Explains the row colours and shows how many entries fall in each bucket.
#[derive(Debug, Default)]
pub struct Legend;

impl Legend {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, summary: &ListSummary) {
        frame.render_widget(Paragraph::new(legend_line(summary)), area);
    }
}

fn legend_line(summary: &ListSummary) -> Line<'static> {
    let swatch = |classification| Span::styled("■ ", classification_style(classification));
    let muted = Style::default().fg(Color::Gray);

    Line::from(vec![
        Span::styled(format!(" {} entries  ", summary.total), muted),
        swatch(Classification::Missing),
        Span::styled(format!("missing {}  ", summary.missing), muted),
        swatch(Classification::Duplicate),
        Span::styled(format!("duplicate {}  ", summary.duplicates), muted),
        swatch(Classification::MissingAndDuplicate),
        Span::styled("both", muted),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_reports_counts() {
        let summary = ListSummary {
            total: 5,
            missing: 2,
            duplicates: 3,
        };
        let text: String = legend_line(&summary)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(
            text,
            " 5 entries  ■ missing 2  ■ duplicate 3  ■ both"
        );
    }
}
