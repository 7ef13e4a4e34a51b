//! Observation setup and search limits.

use porhalaan_ephem::{GeoLocation, ObserverConfig, Star};

use crate::error::CalendarError;

/// Lake Toba, North Sumatra: latitude in degrees.
pub const LAKE_TOBA_LATITUDE_DEG: f64 = -2.55;
/// Lake Toba longitude in degrees east.
pub const LAKE_TOBA_LONGITUDE_DEG: f64 = 98.55;
/// Approximate lake-shore elevation in meters.
pub const LAKE_TOBA_ELEVATION_M: f64 = 900.0;
/// Horizon dip over the lake, −0:34.
pub const LAKE_TOBA_HORIZON_DEG: f64 = -34.0 / 60.0;

/// The fixed Lake Toba observer: no refraction, horizon at −0:34.
pub fn lake_toba() -> ObserverConfig {
    ObserverConfig::new(GeoLocation::new(
        LAKE_TOBA_LATITUDE_DEG,
        LAKE_TOBA_LONGITUDE_DEG,
        LAKE_TOBA_ELEVATION_M,
    ))
    .with_pressure(0.0)
    .with_horizon_deg(LAKE_TOBA_HORIZON_DEG)
}

/// Stars and window that decide whether a new moon opens the year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityRule {
    /// Must rise within the window after sunset. Default: Antares.
    pub rising_star: Star,
    /// Must set within the window after sunset. Default: Betelgeuse.
    pub setting_star: Star,
    /// Window length after sunset, hours. Default: 3.5.
    pub window_hours: f64,
}

impl Default for VisibilityRule {
    fn default() -> Self {
        Self {
            rising_star: Star::Antares,
            setting_star: Star::Betelgeuse,
            window_hours: 3.5,
        }
    }
}

impl VisibilityRule {
    /// Reject empty or longer-than-a-day windows.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(self.window_hours.is_finite() && self.window_hours > 0.0) {
            return Err(CalendarError::InvalidSearchConfig(
                "window_hours must be positive",
            ));
        }
        if self.window_hours > 24.0 {
            return Err(CalendarError::InvalidSearchConfig(
                "window_hours must not exceed 24",
            ));
        }
        Ok(())
    }
}

/// What to do when evaluating a candidate new moon fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OracleErrorPolicy {
    /// Treat the candidate as not qualifying and keep searching.
    #[default]
    Skip,
    /// Stop the search and return the error.
    Abort,
}

/// Default bound on candidate new moons, about ten years. The star rule
/// can fail for more than three years running under the real sky.
pub const DEFAULT_MAX_LOOKBACK: u32 = 120;

/// Bounds for the backward new-year search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Most candidate new moons to evaluate. Default: [`DEFAULT_MAX_LOOKBACK`].
    pub max_lookback: u32,
    /// Handling of oracle failures on a candidate. Default: skip.
    pub oracle_errors: OracleErrorPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_lookback: DEFAULT_MAX_LOOKBACK,
            oracle_errors: OracleErrorPolicy::Skip,
        }
    }
}

impl SearchConfig {
    /// Bound and error policy.
    pub fn new(max_lookback: u32, oracle_errors: OracleErrorPolicy) -> Self {
        Self {
            max_lookback,
            oracle_errors,
        }
    }

    /// Reject a zero bound.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.max_lookback == 0 {
            return Err(CalendarError::InvalidSearchConfig(
                "max_lookback must be at least 1",
            ));
        }
        Ok(())
    }
}
