//! Particle simulation for the stardrift starfield.
//!
//! A [`ParticleField`] owns every star on screen. Each tick it pulses their
//! size, walks them through a fade-in / active / fade-out lifecycle and moves
//! them relative to a reference point (usually the mouse): far stars drift
//! toward it, near stars are pushed away with a little jitter. Stars leaving
//! the bounds re-enter from the opposite edge.

mod field;
mod force;
mod params;
mod particle;

pub use field::ParticleField;
pub use force::{Force, force_toward, wrap};
pub use params::{Bounds, FieldParams};
pub use particle::{CALMING_COLORS, FadeState, MAX_OPACITY, Particle, Sprite};
