use thiserror::Error;

/// Errors raised while saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory to derive a config location from.
    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
