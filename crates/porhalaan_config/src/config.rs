//! TOML schema. Every section and key is optional; defaults reproduce the
//! Lake Toba observation setup.

use std::fs;
use std::path::Path;

use porhalaan_calendar::{
    DEFAULT_MAX_LOOKBACK, LAKE_TOBA_ELEVATION_M, LAKE_TOBA_HORIZON_DEG, LAKE_TOBA_LATITUDE_DEG,
    LAKE_TOBA_LONGITUDE_DEG,
};
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level porhalaan configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PorhalaanConfig {
    /// Where the sky is watched from.
    #[serde(default)]
    pub observer: ObserverToml,

    /// Which stars open the year.
    #[serde(default)]
    pub visibility: VisibilityToml,

    /// Backward search limits.
    #[serde(default)]
    pub search: SearchToml,
}

impl PorhalaanConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// An angle written as a decimal number or as a `"D:M[:S]"` string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AngleToml {
    /// Decimal degrees.
    Degrees(f64),
    /// Sexagesimal text.
    Text(String),
}

/// The `[observer]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverToml {
    /// Degrees, north positive.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Degrees, east positive.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Meters above sea level.
    #[serde(default = "default_elevation")]
    pub elevation: f64,
    /// Millibars; zero disables refraction.
    #[serde(default)]
    pub pressure: f64,
    /// Degrees Celsius.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Degrees or `"D:M[:S]"`. Default: -0:34.
    #[serde(default = "default_horizon")]
    pub horizon: AngleToml,
}

impl Default for ObserverToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            elevation: default_elevation(),
            pressure: 0.0,
            temperature: default_temperature(),
            horizon: default_horizon(),
        }
    }
}

fn default_latitude() -> f64 {
    LAKE_TOBA_LATITUDE_DEG
}
fn default_longitude() -> f64 {
    LAKE_TOBA_LONGITUDE_DEG
}
fn default_elevation() -> f64 {
    LAKE_TOBA_ELEVATION_M
}
fn default_temperature() -> f64 {
    15.0
}
fn default_horizon() -> AngleToml {
    AngleToml::Degrees(LAKE_TOBA_HORIZON_DEG)
}

/// The `[visibility]` table; star names are resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisibilityToml {
    #[serde(default = "default_rising_star")]
    pub rising_star: String,
    #[serde(default = "default_setting_star")]
    pub setting_star: String,
    #[serde(default = "default_window_hours")]
    pub window_hours: f64,
}

impl Default for VisibilityToml {
    fn default() -> Self {
        Self {
            rising_star: default_rising_star(),
            setting_star: default_setting_star(),
            window_hours: default_window_hours(),
        }
    }
}

fn default_rising_star() -> String {
    "Antares".to_string()
}
fn default_setting_star() -> String {
    "Betelgeuse".to_string()
}
fn default_window_hours() -> f64 {
    3.5
}

/// The `[search]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    /// Default: 120.
    #[serde(default = "default_max_lookback")]
    pub max_lookback: u32,
    /// `"skip"` or `"abort"`.
    #[serde(default = "default_oracle_errors")]
    pub oracle_errors: String,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            max_lookback: default_max_lookback(),
            oracle_errors: default_oracle_errors(),
        }
    }
}

fn default_max_lookback() -> u32 {
    DEFAULT_MAX_LOOKBACK
}
fn default_oracle_errors() -> String {
    "skip".to_string()
}
