use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cuts `text` so that it occupies at most `max_width` terminal columns,
/// ending with an ellipsis when something was removed.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Display width of `text` in columns, saturated to `u16`.
#[must_use]
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Number of card columns for a content area of `width` columns.
#[must_use]
pub const fn grid_columns(width: u16) -> u16 {
    match width {
        0..60 => 1,
        60..120 => 2,
        _ => 3,
    }
}

/// Splits `area` into `rows` x `columns` cells of `cell_height` rows each.
///
/// Cells that do not fit vertically are dropped.
#[must_use]
pub fn grid_cells(area: Rect, columns: u16, cell_height: u16, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, u32::from(columns))))
        .spacing(1)
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for index in 0..count {
        let (Ok(row), Ok(col)) = (
            u16::try_from(index / usize::from(columns)),
            u16::try_from(index % usize::from(columns)),
        ) else {
            break;
        };
        let column = column_areas[usize::from(col)];
        let y = area.y.saturating_add(row.saturating_mul(cell_height));
        if y.saturating_add(cell_height) > area.bottom() {
            break;
        }
        cells.push(Rect::new(column.x, y, column.width, cell_height));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("गोदान", 20, "गोदान" ; "fits")]
    #[test_case("abcdef", 4, "abc…" ; "ascii_cut")]
    #[test_case("abc", 0, "" ; "zero_width")]
    #[test_case("abc", 3, "abc" ; "exact_fit")]
    fn test_truncate_to_width(input: &str, width: usize, expected: &str) {
        assert_eq!(truncate_to_width(input, width), expected);
    }

    #[test]
    fn test_truncate_never_exceeds_width() {
        let text = "जो बोले वो खो जाए, जो मौन रहे वो पा जाए। क्या है वो?";
        for width in 1..30 {
            assert!(truncate_to_width(text, width).width() <= width);
        }
    }

    #[test_case(40, 1 ; "narrow")]
    #[test_case(80, 2 ; "medium")]
    #[test_case(160, 3 ; "wide")]
    fn test_grid_columns(width: u16, expected: u16) {
        assert_eq!(grid_columns(width), expected);
    }

    #[test]
    fn test_grid_cells_fill_rows_then_drop_overflow() {
        let area = Rect::new(0, 0, 61, 20);
        let cells = grid_cells(area, 2, 9, 5);

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].y, 0);
        assert_eq!(cells[1].y, 0);
        assert!(cells[1].x > cells[0].x);
        assert_eq!(cells[2].y, 9);
    }
}
