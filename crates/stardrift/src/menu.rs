//! In-app options menu: one slider per setting.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use stardrift_background::dim_area;
use stardrift_core::{Setting, Settings};

/// Backdrop opacity once fully faded in.
const TARGET_ALPHA: u8 = 200;
/// Backdrop fade per frame.
const ALPHA_STEP: u8 = 10;

const LABEL_WIDTH: u16 = 21;
const VALUE_WIDTH: u16 = 7;
const MENU_WIDTH: u16 = 68;
/// Settings, a spacer, two help lines and the border.
const MENU_HEIGHT: u16 = Setting::COUNT as u16 + 5;

const TRACK_COLOR: Color = Color::Rgb(200, 200, 200);

/// Options menu state.
#[derive(Debug)]
pub struct OptionsMenu {
    open: bool,
    /// Backdrop opacity, eased toward [`TARGET_ALPHA`] while open.
    alpha: u8,
    selected: Setting,
    /// Slider being dragged with the mouse.
    dragging: Option<Setting>,
    /// Slider track areas from the last render, for mouse hit testing.
    tracks: Vec<(Setting, Rect)>,
}

impl Default for OptionsMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            alpha: 0,
            selected: Setting::Fps,
            dragging: None,
            tracks: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.dragging = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dragging = None;
    }

    /// Ease the backdrop toward its open or closed opacity.
    pub fn update_alpha(&mut self) {
        let target = if self.open { TARGET_ALPHA } else { 0 };
        self.alpha = if self.alpha < target {
            self.alpha.saturating_add(ALPHA_STEP).min(target)
        } else {
            self.alpha.saturating_sub(ALPHA_STEP).max(target)
        };
    }

    /// Keyboard navigation and adjustment.
    pub fn on_key_event(&mut self, key: KeyEvent, settings: &mut Settings) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.selected = self.selected.next()
            }
            KeyCode::Left | KeyCode::Char('h') => settings.nudge(self.selected, -1),
            KeyCode::Right | KeyCode::Char('l') => settings.nudge(self.selected, 1),
            KeyCode::PageDown => settings.nudge(self.selected, -10),
            KeyCode::PageUp => settings.nudge(self.selected, 10),
            KeyCode::Home => settings.set(self.selected, *self.selected.range().start()),
            KeyCode::End => settings.set(self.selected, *self.selected.range().end()),
            _ => {}
        }
    }

    /// Click or drag on a slider track to set its value.
    pub fn on_mouse_event(&mut self, mouse: MouseEvent, settings: &mut Settings) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.dragging = self.track_at(mouse.column, mouse.row);
                if let Some(setting) = self.dragging {
                    self.selected = setting;
                    self.drag_to(setting, mouse.column, settings);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(setting) = self.dragging {
                    self.drag_to(setting, mouse.column, settings);
                }
            }
            MouseEventKind::Up(_) => self.dragging = None,
            _ => {}
        }
    }

    fn track_at(&self, column: u16, row: u16) -> Option<Setting> {
        self.tracks
            .iter()
            .find(|(_, rect)| row == rect.y && (rect.left()..rect.right()).contains(&column))
            .map(|(setting, _)| *setting)
    }

    fn drag_to(&self, setting: Setting, column: u16, settings: &mut Settings) {
        if let Some((_, track)) = self.tracks.iter().find(|(s, _)| *s == setting) {
            settings.set(setting, setting.from_fraction(fraction_at(*track, column)));
        }
    }

    /// Draw the menu centred over whatever is already in the frame.
    pub fn render(&mut self, frame: &mut Frame, settings: &Settings) {
        let area = menu_area(frame.area());
        dim_area(frame.buffer_mut(), area, self.alpha);

        let block = Block::bordered()
            .title(" Options ".bold())
            .border_style(Style::new().fg(TRACK_COLOR));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.tracks.clear();
        for (i, (setting, value)) in settings.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let [label_area, track_area, value_area] = Layout::horizontal([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(VALUE_WIDTH),
            ])
            .spacing(1)
            .areas(row);

            let is_selected = setting == self.selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let label = Line::from(format!("{marker}{}", setting.label()));
            let label = if is_selected {
                label.bold().white()
            } else {
                label.gray()
            };
            frame.render_widget(label, label_area);

            let track = slider_track(setting.fraction(value), track_area.width);
            frame.render_widget(Line::from(track).fg(TRACK_COLOR), track_area);
            frame.render_widget(
                Line::from(setting.format(value)).white().right_aligned(),
                value_area,
            );
            self.tracks.push((setting, track_area));
        }

        let help_y = inner.y + Setting::COUNT as u16 + 1;
        if help_y + 1 < inner.bottom() {
            let help = Paragraph::new(vec![
                Line::from(vec![
                    "↑↓".bold().white(),
                    " select  ".dark_gray(),
                    "←→".bold().white(),
                    " adjust  ".dark_gray(),
                    "drag".bold().white(),
                    " set".dark_gray(),
                ]),
                Line::from(vec![
                    Span::from("o").bold().white(),
                    " close  ".dark_gray(),
                    "r".bold().white(),
                    " revert to defaults  ".dark_gray(),
                    "q".bold().white(),
                    " quit".dark_gray(),
                ]),
            ])
            .centered();
            frame.render_widget(help, Rect::new(inner.x, help_y, inner.width, 2));
        }
    }
}

/// Centre the menu box inside `area`, shrinking it to fit.
fn menu_area(area: Rect) -> Rect {
    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Slider bar of `width` cells with the knob at `fraction`.
fn slider_track(fraction: f32, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    let knob = (fraction.clamp(0.0, 1.0) * (width - 1) as f32).round() as usize;
    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        });
    }
    track
}

/// Position of `column` along `track`, 0.0 at the left end and 1.0 at the right.
fn fraction_at(track: Rect, column: u16) -> f32 {
    if track.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1);
    offset as f32 / (track.width - 1) as f32
}
