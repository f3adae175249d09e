//! Backdrop state and starfield rasterisation.

use ratatui::{Frame, buffer::Buffer, style::Style, text::Line, widgets::Paragraph};
use stardrift_core::{Rgb, Settings};
use stardrift_field::{MAX_OPACITY, Sprite};

use crate::chars::{SPILL_CHAR, glyph_for_radius};
use crate::viewport::{CELL_WIDTH, Viewport};

/// Gradient backdrop, cached per terminal height.
#[derive(Debug)]
pub struct BackgroundState {
    /// Colour of the top row; the gradient fades to black at the bottom.
    top: Rgb,
    /// Colour of each row for the last rendered height.
    rows: Vec<Rgb>,
    /// Last known terminal height.
    last_height: u16,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(Settings::DEFAULT_BACKGROUND_TOP)
    }
}

impl BackgroundState {
    pub fn new(top: Rgb) -> Self {
        Self {
            top,
            rows: Vec::new(),
            last_height: 0,
        }
    }

    /// Change the gradient colour; rows are rebuilt on the next render.
    pub fn set_top(&mut self, top: Rgb) {
        if top != self.top {
            self.top = top;
            self.rows.clear();
        }
    }

    /// Backdrop colour of the row `row` cells below the top of the area.
    pub fn row_color(&self, row: u16) -> Rgb {
        self.rows.get(row as usize).copied().unwrap_or(Rgb::BLACK)
    }

    fn ensure_rows(&mut self, height: u16) {
        if height == self.last_height && self.rows.len() == height as usize {
            return;
        }
        self.rows = (0..height)
            .map(|y| self.top.scale(1.0 - y as f32 / height as f32))
            .collect();
        self.last_height = height;
    }

    /// Paint the gradient over the whole frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.ensure_rows(area.height);

        let blank = " ".repeat(area.width as usize);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|color| Line::from(blank.clone()).style(Style::new().bg((*color).into())))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Draw sprites over the backdrop.
    ///
    /// Each sprite's colour is blended over the row colour by its opacity.
    /// Stars wider than half a cell also light up neighbouring cells whose
    /// centre falls inside their radius.
    pub fn render_sprites(
        &self,
        buf: &mut Buffer,
        viewport: Viewport,
        sprites: impl IntoIterator<Item = Sprite>,
    ) {
        for sprite in sprites {
            if sprite.opacity <= 0.0 {
                continue;
            }
            let Some((col, row)) = viewport.cell_at(sprite.x, sprite.y) else {
                continue;
            };
            let ch = glyph_for_radius(sprite.radius);
            self.paint(buf, viewport, col, row, &sprite, ch);

            if sprite.radius <= CELL_WIDTH / 2.0 {
                continue;
            }
            let reach = (sprite.radius / CELL_WIDTH).ceil() as i32;
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (Ok(c), Ok(r)) = (
                        u16::try_from(col as i32 + dx),
                        u16::try_from(row as i32 + dy),
                    ) else {
                        continue;
                    };
                    if c >= viewport.area.right() || r >= viewport.area.bottom() {
                        continue;
                    }
                    let (cx, cy) = viewport.cell_center(c, r);
                    let dist = ((cx - sprite.x).powi(2) + (cy - sprite.y).powi(2)).sqrt();
                    if dist <= sprite.radius {
                        self.paint(buf, viewport, c, r, &sprite, SPILL_CHAR);
                    }
                }
            }
        }
    }

    fn paint(
        &self,
        buf: &mut Buffer,
        viewport: Viewport,
        col: u16,
        row: u16,
        sprite: &Sprite,
        ch: char,
    ) {
        let base = self.row_color(row.saturating_sub(viewport.area.y));
        let color = base.blend(sprite.color, sprite.opacity / MAX_OPACITY);
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(ch).set_fg(color.into());
        }
    }
}
