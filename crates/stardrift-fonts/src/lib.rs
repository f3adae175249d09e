//! Block letter font for the stardrift welcome banner.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

/// Letter A
pub const LETTER_A: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter D
pub const LETTER_D: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter F
pub const LETTER_F: [&str; GLYPH_HEIGHT] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██    ",
];

/// Letter I
pub const LETTER_I: [&str; GLYPH_HEIGHT] = [
    "████", " ██ ", " ██ ", " ██ ", " ██ ", " ██ ", "████",
];

/// Letter R
pub const LETTER_R: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██ ██ ",
    "██  ██",
    "██  ██",
];

/// Letter S
pub const LETTER_S: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██    ",
    " ████ ",
    "    ██",
    "██  ██",
    " ████ ",
];

/// Letter T
pub const LETTER_T: [&str; GLYPH_HEIGHT] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Word gap
pub const SPACE: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// Glyph for `c`, case-insensitive. `None` for characters the font lacks.
pub fn glyph(c: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match c.to_ascii_uppercase() {
        'A' => Some(&LETTER_A),
        'D' => Some(&LETTER_D),
        'F' => Some(&LETTER_F),
        'I' => Some(&LETTER_I),
        'R' => Some(&LETTER_R),
        'S' => Some(&LETTER_S),
        'T' => Some(&LETTER_T),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build a block letter banner.
///
/// Characters missing from the font are skipped. Glyphs are separated by a
/// single column.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, one per row.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();

    (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Width in columns of [`build_banner`] output.
pub fn banner_width(text: &str) -> usize {
    build_banner(text)
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0)
}
