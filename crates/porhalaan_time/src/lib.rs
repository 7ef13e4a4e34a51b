//! Time handling for the porhalaan workspace.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime` parsing/formatting (`YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ssZ`)
//! - `Instant`, the UTC time point passed explicitly to every ephemeris query
//! - ΔT (TT − UT) for lunar phase series expressed in TT
//! - Sidereal time and local hour angles

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{
    SIDEREAL_RATE_RAD_PER_DAY, earth_rotation_angle_rad, gmst_rad,
    hour_angle_rad, local_sidereal_time_rad, wrap_pi,
};
pub use utc_time::UtcTime;
