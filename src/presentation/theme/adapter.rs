use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// The sixteen base ANSI colours, in palette order.
const ANSI_BASE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
];

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ANSI_BASE[0],
            Color::Red => ANSI_BASE[1],
            Color::Green => ANSI_BASE[2],
            Color::Yellow => ANSI_BASE[3],
            Color::Blue => ANSI_BASE[4],
            Color::Magenta => ANSI_BASE[5],
            Color::Cyan => ANSI_BASE[6],
            Color::Gray => ANSI_BASE[7],
            Color::DarkGray => ANSI_BASE[8],
            Color::LightRed => ANSI_BASE[9],
            Color::LightGreen => ANSI_BASE[10],
            Color::LightYellow => ANSI_BASE[11],
            Color::LightBlue => ANSI_BASE[12],
            Color::LightMagenta => ANSI_BASE[13],
            Color::LightCyan => ANSI_BASE[14],
            Color::Indexed(i) => indexed_to_rgb(i),
            _ => ANSI_BASE[15],
        }
    }

    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = Self::to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Keeps the hue of `color` and replaces lightness and saturation.
    #[must_use]
    pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness;
        hsl.s = saturation;
        Self::to_ratatui(hsl)
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => ANSI_BASE[usize::from(i)],
        16..=231 => {
            let cube = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        232..=255 => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_round_trip() {
        let original = Color::Rgb(100, 150, 200);
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(original));

        if let Color::Rgb(r, g, b) = back {
            assert!((i16::from(r) - 100).abs() <= 1);
            assert!((i16::from(g) - 150).abs() <= 1);
            assert!((i16::from(b) - 200).abs() <= 1);
        } else {
            panic!("Expected RGB color");
        }
    }

    #[test]
    fn test_indexed_palette() {
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(indexed_to_rgb(232), (8, 8, 8));
        assert_eq!(indexed_to_rgb(9), (255, 85, 85));
    }

    #[test]
    fn test_shade_sets_lightness() {
        let dark = ColorConverter::shade(Color::Indexed(208), 0.1, 0.5);
        let hsl = ColorConverter::to_hsl(dark);
        assert!((hsl.l - 0.1).abs() < 0.02);
    }
}
