//! Core types shared by the stardrift crates.

mod color;
mod settings;

pub use color::Rgb;
pub use settings::{Setting, Settings};
