//! Observer location and atmosphere for rise/set queries.
//!
//! The horizon, pressure and temperature together decide the altitude a
//! body's upper limb must reach to count as risen or set.

use crate::error::EphemError;

/// Standard refraction at the horizon in arcminutes (1010 mbar, 10 °C).
const HORIZON_REFRACTION_ARCMIN: f64 = 34.0;

/// Reference pressure for [`HORIZON_REFRACTION_ARCMIN`].
const REFERENCE_PRESSURE_MBAR: f64 = 1010.0;

/// Reference temperature for [`HORIZON_REFRACTION_ARCMIN`].
const REFERENCE_TEMPERATURE_C: f64 = 10.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above mean sea level in meters.
    pub elevation_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Where and under what sky the observations are made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub location: GeoLocation,
    /// Atmospheric pressure in millibars. Zero disables refraction.
    pub pressure_mbar: f64,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Altitude of the local horizon in degrees. Negative for a horizon
    /// below the astronomical one, e.g. −0:34 over open water.
    pub horizon_deg: f64,
}

impl ObserverConfig {
    /// Observer with a standard atmosphere and a flat horizon.
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location,
            pressure_mbar: REFERENCE_PRESSURE_MBAR,
            temperature_c: 15.0,
            horizon_deg: 0.0,
        }
    }

    pub fn with_pressure(mut self, pressure_mbar: f64) -> Self {
        self.pressure_mbar = pressure_mbar;
        self
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    pub fn with_horizon_deg(mut self, horizon_deg: f64) -> Self {
        self.horizon_deg = horizon_deg;
        self
    }

    /// Refraction lift at the horizon in degrees.
    ///
    /// 34′ scaled by `P / 1010 · 283 / (273 + T)` (Meeus Eq. 16.5 factor).
    pub fn refraction_deg(&self) -> f64 {
        if self.pressure_mbar <= 0.0 {
            return 0.0;
        }
        let scale = (self.pressure_mbar / REFERENCE_PRESSURE_MBAR)
            * ((273.0 + REFERENCE_TEMPERATURE_C) / (273.0 + self.temperature_c));
        HORIZON_REFRACTION_ARCMIN / 60.0 * scale
    }

    /// Reject coordinates and atmospheres the solver cannot handle.
    pub fn validate(&self) -> Result<(), EphemError> {
        let loc = &self.location;
        if !(loc.latitude_deg.is_finite() && (-90.0..=90.0).contains(&loc.latitude_deg)) {
            return Err(EphemError::InvalidObserver("latitude must be within [-90, 90]"));
        }
        if !(loc.longitude_deg.is_finite() && (-180.0..=180.0).contains(&loc.longitude_deg)) {
            return Err(EphemError::InvalidObserver(
                "longitude must be within [-180, 180]",
            ));
        }
        if !loc.elevation_m.is_finite() {
            return Err(EphemError::InvalidObserver("elevation must be finite"));
        }
        if !(self.pressure_mbar.is_finite() && self.pressure_mbar >= 0.0) {
            return Err(EphemError::InvalidObserver("pressure must be >= 0"));
        }
        if !(self.temperature_c.is_finite() && self.temperature_c > -273.15) {
            return Err(EphemError::InvalidObserver(
                "temperature must be above absolute zero",
            ));
        }
        if !(self.horizon_deg.is_finite() && self.horizon_deg.abs() < 90.0) {
            return Err(EphemError::InvalidObserver("horizon must be within (-90, 90)"));
        }
        Ok(())
    }
}

/// Horizon crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb comes up over the horizon.
    Rising,
    /// Upper limb drops below the horizon.
    Setting,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }
}
