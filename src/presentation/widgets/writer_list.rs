use crate::domain::entities::Writer;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{grid_cells, grid_columns, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

pub const WRITER_CARD_HEIGHT: u16 = 8;

const FOLLOWERS_LABEL: &str = "अनुयायी";
const FOLLOW_LABEL: &str = "अनुसरण करें";

pub struct WriterListStyle {
    pub name: Style,
    pub text: Style,
    pub dimmed: Style,
    pub action: Style,
    pub border: Style,
}

impl WriterListStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            name: theme.title_style,
            text: theme.base_style,
            dimmed: theme.dimmed_style,
            action: theme.selection_style,
            border: theme.border_style,
        }
    }
}

impl Default for WriterListStyle {
    fn default() -> Self {
        Self {
            name: Style::default().add_modifier(Modifier::BOLD),
            text: Style::default(),
            dimmed: Style::default().fg(Color::DarkGray),
            action: Style::default().bg(Color::Yellow).fg(Color::Black),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Grid of writer cards.
pub struct WriterList<'a> {
    writers: &'a [Writer],
    style: WriterListStyle,
}

impl<'a> WriterList<'a> {
    #[must_use]
    pub fn new(writers: &'a [Writer]) -> Self {
        Self {
            writers,
            style: WriterListStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: WriterListStyle) -> Self {
        self.style = style;
        self
    }

    fn render_card(&self, writer: &Writer, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border)
            .title(Span::styled(format!(" {} ", writer.name()), self.style.name));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }
        let width = usize::from(inner.width);

        Paragraph::new(Line::styled(
            format!("{} {FOLLOWERS_LABEL}", writer.followers()),
            self.style.dimmed,
        ))
        .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let bio_height = inner.height.saturating_sub(4).max(1);
        Paragraph::new(Line::styled(writer.bio(), self.style.text))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y + 1, inner.width, bio_height), buf);

        let mut y = inner.y + 1 + bio_height;
        if y < inner.bottom() {
            Paragraph::new(Line::styled(format!(" + {FOLLOW_LABEL} "), self.style.action))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }
        if y < inner.bottom() && !writer.avatar_url().is_empty() {
            Paragraph::new(Line::styled(
                truncate_to_width(writer.avatar_url(), width),
                self.style.dimmed,
            ))
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

impl Widget for WriterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let cells = grid_cells(
            area,
            grid_columns(area.width),
            WRITER_CARD_HEIGHT,
            self.writers.len(),
        );
        for (writer, cell) in self.writers.iter().zip(cells) {
            self.render_card(writer, cell, buf);
        }
    }
}
