//! Characters used to draw stars.

/// Star glyphs from smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '•', '●', '⬤'];

/// Glyph for the cells a large star spills into around its centre.
pub const SPILL_CHAR: char = '●';

/// Pick a glyph for a star of the given radius in virtual pixels.
pub fn glyph_for_radius(radius: f32) -> char {
    if radius < 1.5 {
        STAR_CHARS[0]
    } else if radius < 2.5 {
        STAR_CHARS[1]
    } else if radius < 4.0 {
        STAR_CHARS[2]
    } else {
        STAR_CHARS[3]
    }
}
