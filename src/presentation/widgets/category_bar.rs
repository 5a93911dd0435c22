use crate::domain::entities::Category;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct CategoryBarStyle {
    pub chip: Style,
    pub selected: Style,
}

impl CategoryBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            chip: theme.chip_style,
            selected: theme.selection_style,
        }
    }
}

impl Default for CategoryBarStyle {
    fn default() -> Self {
        Self {
            chip: Style::default().fg(Color::Gray),
            selected: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Row of category chips with the active one highlighted.
pub struct CategoryBar<'a> {
    categories: &'a [Category],
    selected: Category,
    style: CategoryBarStyle,
}

impl<'a> CategoryBar<'a> {
    #[must_use]
    pub fn new(categories: &'a [Category], selected: Category) -> Self {
        Self {
            categories,
            selected,
            style: CategoryBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: CategoryBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.categories.len() * 2 + 1);
        spans.push(Span::raw(" "));
        for category in self.categories {
            let style = if *category == self.selected {
                self.style.selected
            } else {
                self.style.chip
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(Line::from(self.build_spans()))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
