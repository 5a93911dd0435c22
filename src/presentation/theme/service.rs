use super::adapter::ColorConverter;
use crate::domain::entities::Appearance;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved styles for one accent colour and one appearance.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub appearance: Appearance,
    pub base_style: Style,
    pub dimmed_style: Style,
    pub title_style: Style,
    pub accent_style: Style,
    pub selection_style: Style,
    pub chip_style: Style,
    pub banner_style: Style,
    pub border_style: Style,
    pub footer_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Orange", Appearance::Dark)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, appearance: Appearance) -> Self {
        Self::from_color(parse_color(accent_color_str), appearance)
    }

    #[must_use]
    pub fn from_color(accent: Color, appearance: Appearance) -> Self {
        let (background, foreground, muted) = match appearance {
            Appearance::Dark => (
                Color::Rgb(17, 24, 39),
                Color::Rgb(229, 231, 235),
                Color::Rgb(156, 163, 175),
            ),
            Appearance::Light => (
                Color::Rgb(255, 247, 237),
                Color::Rgb(31, 41, 55),
                Color::Rgb(75, 85, 99),
            ),
        };

        let chip_bg = match appearance {
            Appearance::Dark => ColorConverter::shade(accent, 0.2, 0.6),
            Appearance::Light => ColorConverter::shade(accent, 0.9, 0.9),
        };
        let banner_bg = ColorConverter::shade(accent, 0.4, 0.85);

        Self {
            accent,
            appearance,
            base_style: Style::default().bg(background).fg(foreground),
            dimmed_style: Style::default().fg(muted),
            title_style: Style::default().fg(foreground).add_modifier(Modifier::BOLD),
            accent_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection_style: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            chip_style: Style::default().bg(chip_bg).fg(foreground),
            banner_style: Style::default()
                .bg(banner_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(muted),
            footer_style: Style::default().bg(Color::Rgb(31, 41, 55)).fg(muted),
        }
    }

    /// Same accent with the other appearance.
    #[must_use]
    pub fn with_appearance(self, appearance: Appearance) -> Self {
        if appearance == self.appearance {
            self
        } else {
            Self::from_color(self.accent, appearance)
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "rose" => Color::Rgb(244, 63, 94),
        _ => Color::Indexed(208),
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
            Some((
                channel(&doubled[0..2])?,
                channel(&doubled[2..4])?,
                channel(&doubled[4..6])?,
            ))
        }
        _ => None,
    }
}
