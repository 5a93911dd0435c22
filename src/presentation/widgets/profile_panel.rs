use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

const HEADING: &str = "मेरा प्रोफ़ाइल";
const READER: &str = "पाठक";
const MEMBER_SINCE: &str = "2023 से सदस्य";
const BOOK_LIST: &str = "मेरी पुस्तक सूची";
const EMPTY_LIST: &str = "अभी तक कोई पुस्तक नहीं जोड़ी गई";

/// Static placeholder for the reader profile.
pub struct ProfilePanel {
    theme: Theme,
}

impl ProfilePanel {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ProfilePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style)
            .title(Span::styled(format!(" {HEADING} "), self.theme.title_style));

        let rule = "─".repeat(usize::from(area.width.saturating_sub(4)));
        let lines = vec![
            Line::from(vec![
                Span::styled(" ◉ ", self.theme.chip_style),
                Span::raw(" "),
                Span::styled(READER, self.theme.title_style),
            ]),
            Line::styled(format!("    {MEMBER_SINCE}"), self.theme.dimmed_style),
            Line::styled(rule, self.theme.border_style),
            Line::styled(BOOK_LIST, self.theme.accent_style),
            Line::styled(EMPTY_LIST, self.theme.dimmed_style),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
