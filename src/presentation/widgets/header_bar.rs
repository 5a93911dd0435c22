use crate::domain::entities::{Appearance, View};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::display_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

trait AppearanceExt {
    fn indicator(self) -> &'static str;
}

impl AppearanceExt for Appearance {
    fn indicator(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub title: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub control: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.base_style,
            title: theme.accent_style,
            tab: theme.dimmed_style,
            tab_active: theme.selection_style,
            control: theme.title_style,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            tab: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            control: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Top row: library title, view tabs (or the menu control in compact
/// layout) and the theme indicator.
pub struct HeaderBar<'a> {
    title: &'a str,
    active: View,
    compact: bool,
    menu_open: bool,
    appearance: Appearance,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(title: &'a str, active: View) -> Self {
        Self {
            title,
            active,
            compact: false,
            menu_open: false,
            appearance: Appearance::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// Replaces the tabs with the menu control.
    #[must_use]
    pub const fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    #[must_use]
    pub const fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    #[must_use]
    pub const fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();

        if self.compact {
            let control = if self.menu_open { " ✕ " } else { " ☰ " };
            spans.push(Span::styled(control, self.style.control));
        } else {
            for (i, view) in View::ALL.into_iter().enumerate() {
                let style = if view == self.active {
                    self.style.tab_active
                } else {
                    self.style.tab
                };
                spans.push(Span::styled(format!(" {} {} ", i + 1, view.label()), style));
                spans.push(Span::raw(" "));
            }
        }

        spans.push(Span::styled(
            format!(" {} ", self.appearance.indicator()),
            self.style.control,
        ));
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style.background);

        let left_line = Line::from(Span::styled(format!(" ▤ {} ", self.title), self.style.title));
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        Paragraph::new(left_line).render(
            Rect::new(area.x, area.y, left_width.min(area.width), 1),
            buf,
        );

        let right_spans = self.build_right_spans();
        let right_width: u16 = right_spans
            .iter()
            .map(|s| display_width(&s.content))
            .fold(0, u16::saturating_add);

        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            Paragraph::new(Line::from(right_spans))
                .render(Rect::new(right_x, area.y, right_width, 1), buf);
        }
    }
}
