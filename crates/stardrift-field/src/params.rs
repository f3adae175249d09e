//! Tunable coefficients passed into every tick.

use stardrift_core::{Setting, Settings};

/// Pulse speed scale at which per-particle speeds are used unmodified.
pub const REFERENCE_PULSE_SPEED: f32 = 0.05;

/// Force, fade and pulse coefficients for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Simulation ticks per second.
    pub tick_rate: f32,
    /// Mean fade-in / fade-out duration in seconds.
    pub fade_duration: f32,
    pub attraction_strength: f32,
    /// Distance below which the reference point repels.
    pub repulsion_threshold: f32,
    pub repulsion_strength: f32,
    /// Smallest base radius; 1 leaves the randomized sizes untouched.
    pub particle_size: f32,
    /// Multiplier on every particle's pulse amplitude.
    pub pulse_amplitude_scale: f32,
    /// Pulse speed; [`REFERENCE_PULSE_SPEED`] leaves particle speeds untouched.
    pub pulse_speed_scale: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for FieldParams {
    fn from(settings: &Settings) -> Self {
        Self {
            tick_rate: settings.get(Setting::Fps),
            fade_duration: settings.get(Setting::FadeDuration),
            attraction_strength: settings.get(Setting::AttractionStrength),
            repulsion_threshold: settings.get(Setting::RepulsionThreshold),
            repulsion_strength: settings.get(Setting::RepulsionStrength),
            particle_size: settings.get(Setting::ParticleSize),
            pulse_amplitude_scale: settings.get(Setting::PulseAmplitude),
            pulse_speed_scale: settings.get(Setting::PulseSpeed),
        }
    }
}

impl FieldParams {
    /// Radius added on top of each particle's randomized base size.
    pub(crate) fn size_offset(&self) -> f32 {
        (self.particle_size - 1.0).max(0.0)
    }

    /// Factor applied to each particle's pulse speed.
    pub(crate) fn pulse_speed_factor(&self) -> f32 {
        self.pulse_speed_scale / REFERENCE_PULSE_SPEED
    }
}

/// Size of the simulated area. Positions live in `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_neutral() {
        let params = FieldParams::default();
        assert_eq!(params.tick_rate, 60.0);
        assert_eq!(params.size_offset(), 0.0);
        assert!((params.pulse_speed_factor() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.set(Setting::ParticleSize, 4.0);
        settings.set(Setting::RepulsionThreshold, 80.0);
        let params = FieldParams::from(&settings);
        assert_eq!(params.size_offset(), 3.0);
        assert_eq!(params.repulsion_threshold, 80.0);
    }
}
