//! Tunable parameters and their slider metadata.

use std::ops::RangeInclusive;

use crate::Rgb;

/// One tunable parameter of the starfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Fps,
    NumParticles,
    FadeDuration,
    AttractionStrength,
    RepulsionThreshold,
    RepulsionStrength,
    ParticleSize,
    PulseAmplitude,
    PulseSpeed,
}

impl Setting {
    pub const COUNT: usize = 9;

    /// All settings in menu order.
    pub const ALL: [Setting; Setting::COUNT] = [
        Setting::Fps,
        Setting::NumParticles,
        Setting::FadeDuration,
        Setting::AttractionStrength,
        Setting::RepulsionThreshold,
        Setting::RepulsionStrength,
        Setting::ParticleSize,
        Setting::PulseAmplitude,
        Setting::PulseSpeed,
    ];

    /// Key used in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Setting::Fps => "fps",
            Setting::NumParticles => "num_particles",
            Setting::FadeDuration => "fade_duration",
            Setting::AttractionStrength => "attraction_strength",
            Setting::RepulsionThreshold => "repulsion_threshold",
            Setting::RepulsionStrength => "repulsion_strength",
            Setting::ParticleSize => "particle_size",
            Setting::PulseAmplitude => "pulse_amplitude",
            Setting::PulseSpeed => "pulse_speed",
        }
    }

    /// Human readable label for the options menu.
    pub fn label(self) -> &'static str {
        match self {
            Setting::Fps => "FPS",
            Setting::NumParticles => "Num Particles",
            Setting::FadeDuration => "Fade Duration",
            Setting::AttractionStrength => "Attraction Strength",
            Setting::RepulsionThreshold => "Repulsion Threshold",
            Setting::RepulsionStrength => "Repulsion Strength",
            Setting::ParticleSize => "Particle Size",
            Setting::PulseAmplitude => "Pulse Amplitude",
            Setting::PulseSpeed => "Pulse Speed",
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            Setting::Fps => 60.0,
            Setting::NumParticles => 200.0,
            Setting::FadeDuration => 3.0,
            Setting::AttractionStrength => 0.01,
            Setting::RepulsionThreshold => 50.0,
            Setting::RepulsionStrength => 0.02,
            Setting::ParticleSize => 1.0,
            Setting::PulseAmplitude => 1.0,
            Setting::PulseSpeed => 0.05,
        }
    }

    /// Valid slider range, inclusive on both ends.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Setting::Fps => 30.0..=120.0,
            Setting::NumParticles => 50.0..=500.0,
            Setting::FadeDuration => 1.0..=10.0,
            Setting::AttractionStrength => 0.005..=0.05,
            Setting::RepulsionThreshold => 20.0..=100.0,
            Setting::RepulsionStrength => 0.01..=0.1,
            Setting::ParticleSize => 1.0..=10.0,
            Setting::PulseAmplitude => 0.5..=2.0,
            Setting::PulseSpeed => 0.01..=0.1,
        }
    }

    /// Whether the value is truncated to a whole number.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            Setting::Fps | Setting::NumParticles | Setting::ParticleSize
        )
    }

    /// Increment applied by a single keyboard nudge.
    pub fn step(self) -> f32 {
        if self.is_integral() {
            1.0
        } else {
            let range = self.range();
            (range.end() - range.start()) / 100.0
        }
    }

    /// Clamp to range and round integral settings.
    pub fn normalize(self, value: f32) -> f32 {
        let range = self.range();
        let value = if value.is_finite() {
            value
        } else {
            self.default_value()
        };
        let value = value.clamp(*range.start(), *range.end());
        if self.is_integral() {
            value.round()
        } else {
            value
        }
    }

    /// Position of `value` within the range, 0.0-1.0.
    pub fn fraction(self, value: f32) -> f32 {
        let range = self.range();
        ((value - range.start()) / (range.end() - range.start())).clamp(0.0, 1.0)
    }

    /// Inverse of [`Setting::fraction`].
    pub fn from_fraction(self, fraction: f32) -> f32 {
        let range = self.range();
        let fraction = fraction.clamp(0.0, 1.0);
        self.normalize(range.start() + fraction * (range.end() - range.start()))
    }

    /// Format a value for display next to the slider.
    pub fn format(self, value: f32) -> String {
        if self.is_integral() {
            format!("{value:.0}")
        } else if *self.range().start() < 0.1 {
            format!("{value:.3}")
        } else {
            format!("{value:.2}")
        }
    }

    /// Cycle to the next setting.
    pub fn next(self) -> Self {
        let idx = self.index();
        Setting::ALL[(idx + 1) % Setting::ALL.len()]
    }

    /// Cycle to the previous setting.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Setting::ALL[(idx + Setting::ALL.len() - 1) % Setting::ALL.len()]
    }

    /// Position in [`Setting::ALL`].
    pub fn index(self) -> usize {
        Setting::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

/// Current value of every tunable, always within range.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    values: [f32; Setting::COUNT],
    /// Top colour of the backdrop gradient.
    pub background_top: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: Setting::ALL.map(Setting::default_value),
            background_top: Settings::DEFAULT_BACKGROUND_TOP,
        }
    }
}

impl Settings {
    /// Dark blue fading to black at the bottom of the screen.
    pub const DEFAULT_BACKGROUND_TOP: Rgb = Rgb(0, 0, 50);

    pub fn get(&self, setting: Setting) -> f32 {
        self.values[setting.index()]
    }

    /// Store `value`, clamped and rounded per [`Setting::normalize`].
    pub fn set(&mut self, setting: Setting, value: f32) {
        self.values[setting.index()] = setting.normalize(value);
    }

    /// Move `setting` by `steps` keyboard increments.
    pub fn nudge(&mut self, setting: Setting, steps: i32) {
        let value = self.get(setting) + setting.step() * steps as f32;
        self.set(setting, value);
    }

    /// Revert every tunable to its default. The backdrop colour is only
    /// set from the config file and is kept.
    pub fn reset(&mut self) {
        self.values = Setting::ALL.map(Setting::default_value);
    }

    /// Target frames per second.
    pub fn tick_rate(&self) -> u32 {
        self.get(Setting::Fps) as u32
    }

    pub fn particle_count(&self) -> usize {
        self.get(Setting::NumParticles) as usize
    }

    /// Iterate over `(setting, value)` pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (Setting, f32)> + '_ {
        Setting::ALL.iter().map(|s| (*s, self.get(*s)))
    }
}
