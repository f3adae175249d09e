//! A single star and its fade lifecycle.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use stardrift_core::Rgb;

use crate::force::{Force, force_toward, wrap};
use crate::{Bounds, FieldParams};

/// Fully opaque.
pub const MAX_OPACITY: f32 = 255.0;

/// Per-axis jitter added while a particle is being repelled.
const SWIRL_JITTER: f32 = 0.1;

/// Calming palette stars are coloured from.
pub const CALMING_COLORS: [Rgb; 6] = [
    Rgb(173, 216, 230), // light blue
    Rgb(230, 230, 250), // lavender
    Rgb(152, 251, 152), // mint green
    Rgb(255, 218, 185), // peach
    Rgb(135, 206, 235), // sky blue
    Rgb(255, 255, 224), // pale yellow
];

/// Where a particle is in its fade lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeState {
    #[default]
    FadingIn,
    Active,
    FadingOut,
}

/// What the renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    /// 0.0 (invisible) to 255.0 (opaque).
    pub opacity: f32,
}

/// A single star.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) position: Vec2,
    /// Radius before pulsing.
    pub(crate) base_size: f32,
    /// Radius after pulsing, never below 1.
    pub(crate) size: f32,
    pub(crate) color: Rgb,
    pub(crate) pulse_amplitude: f32,
    pub(crate) pulse_speed: f32,
    pub(crate) state: FadeState,
    pub(crate) opacity: f32,
    pub(crate) fade_in_rate: f32,
    pub(crate) fade_out_rate: f32,
    /// Ticks spent in [`FadeState::Active`].
    pub(crate) active_timer: f32,
    /// Ticks to stay active before fading out.
    pub(crate) active_duration: f32,
}

impl Particle {
    /// Particle at the origin with no motion; must be respawned before use.
    pub(crate) fn placeholder() -> Self {
        Self {
            position: Vec2::ZERO,
            base_size: 1.0,
            size: 1.0,
            color: CALMING_COLORS[0],
            pulse_amplitude: 0.0,
            pulse_speed: 0.0,
            state: FadeState::FadingIn,
            opacity: 0.0,
            fade_in_rate: 0.0,
            fade_out_rate: 0.0,
            active_timer: 0.0,
            active_duration: 0.0,
        }
    }

    /// Construct and immediately respawn within `bounds`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, params: &FieldParams) -> Self {
        let mut particle = Self::placeholder();
        particle.respawn(rng, bounds, params);
        particle
    }

    /// Reset to a fresh, fully transparent star at a random position.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, params: &FieldParams) {
        self.position = Vec2::new(
            rng.random_range(0.0..=bounds.width),
            rng.random_range(0.0..=bounds.height),
        );
        self.color = *CALMING_COLORS.choose(rng).unwrap_or(&CALMING_COLORS[0]);
        self.base_size = f32::from(rng.random_range(1..=3u8));
        self.size = self.base_size;
        self.pulse_amplitude = rng.random_range(0.5..=1.5);
        self.pulse_speed = rng.random_range(0.01..=0.05);
        self.state = FadeState::FadingIn;
        self.opacity = 0.0;
        self.fade_in_rate = fade_rate(rng, params);
        self.active_timer = 0.0;
        self.active_duration = rng.random_range(2.0..=5.0) * params.tick_rate;
        self.fade_out_rate = fade_rate(rng, params);
    }

    /// Advance one tick.
    ///
    /// `elapsed_ms` is the host clock shared by every particle. Returns `true`
    /// when the particle finished fading out and was respawned; it then skips
    /// movement until the next tick.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        reference: Vec2,
        bounds: Bounds,
        elapsed_ms: u64,
        params: &FieldParams,
    ) -> bool {
        self.pulse(elapsed_ms, params);

        match self.state {
            FadeState::FadingIn => {
                self.opacity = (self.opacity + self.fade_in_rate).min(MAX_OPACITY);
                if self.opacity >= MAX_OPACITY {
                    self.state = FadeState::Active;
                    self.active_timer = 0.0;
                }
            }
            FadeState::Active => {
                self.active_timer += 1.0;
                if self.active_timer >= self.active_duration {
                    self.state = FadeState::FadingOut;
                }
            }
            FadeState::FadingOut => {
                self.opacity -= self.fade_out_rate;
                if self.opacity <= 0.0 {
                    self.respawn(rng, bounds, params);
                    return true;
                }
            }
        }

        if self.opacity > 0.0 {
            let force = force_toward(reference - self.position, params);
            if let Force::Repel(_) = force {
                self.position += Vec2::new(
                    rng.random_range(-SWIRL_JITTER..=SWIRL_JITTER),
                    rng.random_range(-SWIRL_JITTER..=SWIRL_JITTER),
                );
            }
            self.position += force.displacement();
        }

        self.position = wrap(self.position, bounds);
        false
    }

    fn pulse(&mut self, elapsed_ms: u64, params: &FieldParams) {
        let speed = (self.pulse_speed * params.pulse_speed_factor()) as f64;
        let phase = (elapsed_ms as f64 * 0.001 * speed).sin() as f32;
        let amplitude = self.pulse_amplitude * params.pulse_amplitude_scale;
        self.size = (self.base_size + params.size_offset() + amplitude * phase).max(1.0);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current (pulsed) radius.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            x: self.position.x,
            y: self.position.y,
            radius: self.size,
            color: self.color,
            opacity: self.opacity.clamp(0.0, MAX_OPACITY),
        }
    }
}

/// Per-tick opacity step for a fade lasting around `fade_duration` seconds.
fn fade_rate<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams) -> f32 {
    let seconds = rng.random_range((params.fade_duration - 0.5)..=(params.fade_duration + 0.5));
    MAX_OPACITY / (seconds * params.tick_rate).max(f32::EPSILON)
}
