use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

const HEADING: &str = "साहित्यिक समुदाय";
const TODAY: &str = "आज की चर्चा";
const COMMENT_LABEL: &str = "टिप्पणी करें";
const SHARE_LABEL: &str = "साझा करें";

/// Static placeholder for the community view: today's discussion topic.
pub struct CommunityPanel<'a> {
    topic: &'a str,
    theme: Theme,
}

impl<'a> CommunityPanel<'a> {
    #[must_use]
    pub const fn new(topic: &'a str, theme: Theme) -> Self {
        Self { topic, theme }
    }
}

impl Widget for CommunityPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style)
            .title(Span::styled(format!(" {HEADING} "), self.theme.title_style));

        let lines = vec![
            Line::styled(TODAY, self.theme.accent_style),
            Line::default(),
            Line::styled(format!("\"{}\"", self.topic), self.theme.base_style),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("✉ {COMMENT_LABEL}"), self.theme.dimmed_style),
                Span::raw("    "),
                Span::styled(format!("↗ {SHARE_LABEL}"), self.theme.dimmed_style),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .style(Style::default())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
