//! Rendering for the stardrift starfield.
//!
//! The particle field lives in a virtual pixel space laid over the terminal
//! grid (see [`Viewport`]). This crate paints the gradient backdrop, then
//! rasterises particle sprites onto cells with their colour alpha-blended
//! over the backdrop, and provides the dimming used behind overlays.

mod chars;
mod color;
mod state;
mod viewport;

pub use chars::glyph_for_radius;
pub use color::{cell_rgb, dim_area};
pub use state::BackgroundState;
pub use viewport::{CELL_HEIGHT, CELL_WIDTH, Viewport};
