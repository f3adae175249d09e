//! Colour helpers operating on rendered cells.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use stardrift_core::Rgb;

/// RGB value of a cell colour, if it is a true-colour value.
pub fn cell_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb(r, g, b)),
        Color::Black => Some(Rgb::BLACK),
        Color::White => Some(Rgb::WHITE),
        _ => None,
    }
}

/// Darken every cell in `area` toward black by `alpha` (0-255).
pub fn dim_area(buf: &mut Buffer, area: Rect, alpha: u8) {
    let area = area.intersection(buf.area);
    let keep = 1.0 - alpha as f32 / 255.0;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = cell_rgb(cell.bg).unwrap_or(Rgb::BLACK);
                cell.set_bg(bg.scale(keep).into());
                if let Some(fg) = cell_rgb(cell.fg) {
                    cell.set_fg(fg.scale(keep).into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_area() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        for cell in buf.content.iter_mut() {
            cell.set_bg(Color::Rgb(0, 0, 200));
            cell.set_fg(Color::Rgb(100, 100, 100));
        }
        dim_area(&mut buf, Rect::new(0, 0, 2, 1), 255);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(0, 0, 200));
        assert_eq!(buf[(0, 1)].bg, Color::Rgb(0, 0, 200));

        dim_area(&mut buf, Rect::new(2, 0, 1, 1), 0);
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(0, 0, 200));
    }
}
