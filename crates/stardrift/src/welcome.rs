//! Start-up screen shown until the first key press.

use std::path::Path;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};
use stardrift_fonts::{banner_width, build_banner};

const TITLE: &str = "stardrift";
const BANNER_COLOR: Color = Color::Rgb(173, 216, 230);
const TEXT_COLOR: Color = Color::Rgb(200, 200, 200);

/// Render the welcome screen.
pub fn render(frame: &mut Frame, config_path: Option<&Path>) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), area);

    // Fall back to a plain title when the banner does not fit.
    let title: Vec<Line> = if banner_width(TITLE) <= area.width as usize {
        build_banner(TITLE)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(BANNER_COLOR)))
            .collect()
    } else {
        vec![Line::from("Stardrift").bold().fg(BANNER_COLOR)]
    };
    let title_height = title.len() as u16;

    let theme_hint = match config_path {
        Some(path) => format!("Set background_top in {} to change the theme", path.display()),
        None => "Set background_top in config.toml to change the theme".to_string(),
    };
    let text = vec![
        Line::from("Welcome to a calming starfield").fg(Color::White),
        Line::from(""),
        Line::from(vec![
            "Press ".fg(TEXT_COLOR),
            "o".bold().white(),
            " to open the options menu".fg(TEXT_COLOR),
        ]),
        Line::from(theme_hint).fg(TEXT_COLOR),
        Line::from(""),
        Line::from("Press any key to start").fg(TEXT_COLOR),
    ];
    let text_height = text.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Fill(1),                // Top padding
        Constraint::Length(title_height),   // Banner
        Constraint::Length(2),              // Spacing
        Constraint::Length(text_height),    // Instructions
        Constraint::Fill(1),                // Bottom padding
    ])
    .split(area);

    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[3]);
}
