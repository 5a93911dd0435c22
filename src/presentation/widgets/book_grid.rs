use crate::domain::entities::Book;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{grid_cells, grid_columns, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Rows taken by one card, borders included.
pub const BOOK_CARD_HEIGHT: u16 = 8;

const READ_LABEL: &str = "पढ़ें";
const EMPTY_MESSAGE: &str = "इस श्रेणी में अभी कोई पुस्तक नहीं है";

pub struct BookGridStyle {
    pub title: Style,
    pub text: Style,
    pub dimmed: Style,
    pub chip: Style,
    pub action: Style,
    pub border: Style,
}

impl BookGridStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.title_style,
            text: theme.base_style,
            dimmed: theme.dimmed_style,
            chip: theme.chip_style,
            action: theme.selection_style,
            border: theme.border_style,
        }
    }
}

impl Default for BookGridStyle {
    fn default() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            text: Style::default(),
            dimmed: Style::default().fg(Color::DarkGray),
            chip: Style::default().fg(Color::Yellow),
            action: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Responsive grid of book cards.
pub struct BookGrid<'a> {
    books: &'a [&'a Book],
    style: BookGridStyle,
}

impl<'a> BookGrid<'a> {
    #[must_use]
    pub fn new(books: &'a [&'a Book]) -> Self {
        Self {
            books,
            style: BookGridStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: BookGridStyle) -> Self {
        self.style = style;
        self
    }

    fn render_card(&self, book: &Book, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border)
            .title(Span::styled(format!(" {} ", book.title()), self.style.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let width = usize::from(inner.width);
        let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

        let lines: [(u16, Line<'_>, Alignment); 4] = [
            (
                0,
                Line::styled(truncate_to_width(book.author(), width), self.style.text),
                Alignment::Left,
            ),
            (
                1,
                Line::styled(book.year().to_string(), self.style.dimmed),
                Alignment::Left,
            ),
            (
                2,
                Line::styled(engagement_text(book), self.style.dimmed),
                Alignment::Left,
            ),
            (
                3,
                Line::styled(format!(" ▸ {READ_LABEL} "), self.style.action),
                Alignment::Center,
            ),
        ];

        for (offset, line, alignment) in lines {
            if offset >= inner.height {
                break;
            }
            Paragraph::new(line).alignment(alignment).render(row(offset), buf);
        }

        if inner.height > 1 {
            Paragraph::new(Line::styled(format!(" {} ", book.genre()), self.style.chip))
                .alignment(Alignment::Right)
                .render(row(1), buf);
        }

        if inner.height > 4 && !book.cover_url().is_empty() {
            Paragraph::new(Line::styled(
                truncate_to_width(book.cover_url(), width),
                self.style.dimmed,
            ))
            .render(row(4), buf);
        }
    }
}

fn engagement_text(book: &Book) -> String {
    let e = book.engagement();
    format!("♥ {}   ✉ {}   ↗ {}", e.likes, e.comments, e.shares)
}

impl Widget for BookGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.books.is_empty() {
            Paragraph::new(Line::styled(EMPTY_MESSAGE, self.style.dimmed))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let cells = grid_cells(
            area,
            grid_columns(area.width),
            BOOK_CARD_HEIGHT,
            self.books.len(),
        );
        for (book, cell) in self.books.iter().zip(cells) {
            self.render_card(book, cell, buf);
        }
    }
}
