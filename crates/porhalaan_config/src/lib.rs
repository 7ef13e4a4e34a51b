//! TOML configuration for the porhalaan converter.
//!
//! [`PorhalaanConfig`] mirrors the file; [`PorhalaanConfig::resolve`] turns
//! it into the observer, visibility rule and search limits the calendar
//! takes.

pub mod config;
pub mod convert;
pub mod error;

pub use config::{AngleToml, ObserverToml, PorhalaanConfig, SearchToml, VisibilityToml};
pub use convert::{
    Settings, build_observer, build_search_config, build_visibility_rule, parse_angle,
    parse_oracle_errors, parse_star,
};
pub use error::ConfigError;
