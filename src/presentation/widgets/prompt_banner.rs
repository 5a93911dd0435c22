use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::truncate_to_width;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Banner showing the current riddle, centred on its middle row.
pub struct PromptBanner<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> PromptBanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn from_theme(text: &'a str, theme: &Theme) -> Self {
        Self::new(text).style(theme.banner_style)
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for PromptBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(area, self.style);

        let text = truncate_to_width(self.text, usize::from(area.width.saturating_sub(4)));
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Line::from(vec![Span::raw("❝ "), Span::raw(text)]))
            .style(self.style)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_support::{buffer_text, row_text};

    #[test]
    fn test_banner_renders_on_middle_row() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        PromptBanner::new("riddle one").render(area, &mut buf);

        assert!(row_text(&buf, 0).is_empty());
        assert!(row_text(&buf, 1).contains("riddleone"));
        assert!(row_text(&buf, 2).is_empty());
    }

    #[test]
    fn test_banner_truncates_long_text() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        PromptBanner::new("a very long riddle indeed").render(area, &mut buf);

        assert!(buffer_text(&buf).contains('…'));
    }
}
