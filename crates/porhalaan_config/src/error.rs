//! Error types for loading and resolving configuration.

use std::path::PathBuf;

use porhalaan_frames::AngleParseError;

/// Errors from reading a config file or turning it into calculation settings.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the schema.
    #[error("invalid config TOML")]
    Toml(#[from] toml::de::Error),
    /// A star name that is not in the catalog.
    #[error("unknown star '{name}' in [visibility].{field}")]
    UnknownStar {
        /// Offending key.
        field: &'static str,
        name: String,
    },
    /// A horizon string that is neither decimal nor `D:M[:S]`.
    #[error("invalid [observer].horizon")]
    InvalidAngle(#[from] AngleParseError),
    /// A value parsed but is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
