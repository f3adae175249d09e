//! Mapping between [`Settings`] and the on-disk TOML table.

use serde::Serialize;
use stardrift_core::{Rgb, Setting, Settings};
use toml::{Table, Value};

use crate::ConfigError;

const BACKGROUND_KEY: &str = "background_top";

/// Shape of the file as written.
#[derive(Debug, Serialize)]
struct SettingsDocument {
    fps: i64,
    num_particles: i64,
    fade_duration: f64,
    attraction_strength: f64,
    repulsion_threshold: f64,
    repulsion_strength: f64,
    particle_size: i64,
    pulse_amplitude: f64,
    pulse_speed: f64,
    background_top: String,
}

impl From<&Settings> for SettingsDocument {
    fn from(settings: &Settings) -> Self {
        let float = |s: Setting| tidy(settings.get(s));
        let int = |s: Setting| settings.get(s).round() as i64;
        Self {
            fps: int(Setting::Fps),
            num_particles: int(Setting::NumParticles),
            fade_duration: float(Setting::FadeDuration),
            attraction_strength: float(Setting::AttractionStrength),
            repulsion_threshold: float(Setting::RepulsionThreshold),
            repulsion_strength: float(Setting::RepulsionStrength),
            particle_size: int(Setting::ParticleSize),
            pulse_amplitude: float(Setting::PulseAmplitude),
            pulse_speed: float(Setting::PulseSpeed),
            background_top: settings.background_top.to_string(),
        }
    }
}

/// Widen to f64 without dragging f32 noise (0.009999999776…) into the file.
fn tidy(value: f32) -> f64 {
    (value as f64 * 1e6).round() / 1e6
}

/// Serialize every setting to a TOML document.
pub fn render_settings(settings: &Settings) -> Result<String, ConfigError> {
    Ok(toml::to_string(&SettingsDocument::from(settings))?)
}

/// Parse a TOML document, falling back per key.
///
/// Unparseable documents yield [`Settings::default`]. Within a valid document
/// each key is read on its own: missing or non-numeric values keep the
/// default, out-of-range values are clamped.
pub fn parse_settings(text: &str) -> Settings {
    match toml::from_str::<Table>(text) {
        Ok(table) => settings_from_table(&table),
        Err(e) => {
            log::warn!("settings file is not valid TOML, using defaults: {e}");
            Settings::default()
        }
    }
}

fn settings_from_table(table: &Table) -> Settings {
    let mut settings = Settings::default();

    for setting in Setting::ALL {
        match table.get(setting.key()).map(numeric) {
            Some(Some(value)) => settings.set(setting, value),
            Some(None) => log::warn!("ignoring non-numeric value for {}", setting.key()),
            None => {}
        }
    }

    if let Some(value) = table.get(BACKGROUND_KEY) {
        match value.as_str().map(str::parse::<Rgb>) {
            Some(Ok(color)) => settings.background_top = color,
            Some(Err(e)) => log::warn!("ignoring {BACKGROUND_KEY}: {e}"),
            None => log::warn!("ignoring non-string value for {BACKGROUND_KEY}"),
        }
    }

    settings
}

fn numeric(value: &Value) -> Option<f32> {
    match value {
        Value::Integer(i) => Some(*i as f32),
        Value::Float(f) => Some(*f as f32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_settings(""), Settings::default());
    }

    #[test]
    fn test_not_toml_is_default() {
        assert_eq!(parse_settings("{\"fps\": 90}"), Settings::default());
    }

    #[test]
    fn test_per_key_fallback() {
        let settings = parse_settings(
            r#"
            fps = 90
            num_particles = "lots"
            fade_duration = 4.5
            repulsion_threshold = 1000
            background_top = "not a colour"
            "#,
        );
        assert_eq!(settings.tick_rate(), 90);
        assert_eq!(settings.particle_count(), 200);
        assert_eq!(settings.get(Setting::FadeDuration), 4.5);
        assert_eq!(settings.get(Setting::RepulsionThreshold), 100.0);
        assert_eq!(settings.background_top, Settings::DEFAULT_BACKGROUND_TOP);
        assert_eq!(settings.get(Setting::PulseSpeed), 0.05);
    }

    #[test]
    fn test_integral_keys_round() {
        let settings = parse_settings("particle_size = 2.6\nfps = 59.4");
        assert_eq!(settings.get(Setting::ParticleSize), 3.0);
        assert_eq!(settings.tick_rate(), 59);
    }

    #[test]
    fn test_render_is_flat_and_tidy() {
        let text = render_settings(&Settings::default()).unwrap();
        assert!(text.contains("fps = 60\n"));
        assert!(text.contains("attraction_strength = 0.01\n"));
        assert!(text.contains("background_top = \"#000032\"\n"));
        assert!(!text.contains('['));
        assert_eq!(parse_settings(&text), Settings::default());
    }
}
