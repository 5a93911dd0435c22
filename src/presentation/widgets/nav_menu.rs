use crate::domain::entities::View;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// Dropdown listing every view, drawn over the content in compact layout.
pub struct NavMenu {
    active: View,
    highlight: View,
    theme: Theme,
}

impl NavMenu {
    #[must_use]
    pub const fn new(active: View, highlight: View, theme: Theme) -> Self {
        Self {
            active,
            highlight,
            theme,
        }
    }

    /// Rows needed to draw every entry plus borders.
    #[must_use]
    pub const fn height() -> u16 {
        View::ALL.len() as u16 + 2
    }

    fn entry_line(&self, index: usize, view: View) -> Line<'static> {
        let marker = if view == self.active { "●" } else { " " };
        let style = if view == self.highlight {
            self.theme.selection_style
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!(" {marker} {} ", index + 1), style),
            Span::styled(format!("{} ", view.label()), style),
        ])
    }
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect::new(area.x, area.y, area.width, area.height.min(Self::height()));
        Clear.render(area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.accent_style)
            .style(self.theme.base_style);

        let lines: Vec<Line<'_>> = View::ALL
            .into_iter()
            .enumerate()
            .map(|(i, view)| self.entry_line(i, view))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
