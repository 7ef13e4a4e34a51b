//! Ephemeris oracle for the porhalaan calendar.
//!
//! [`Ephemeris`] is the seam: the calendar asks it for risings, settings
//! and new moons, each relative to an explicit instant. [`AnalyticEphemeris`]
//! answers from low-precision analytic theories (Meeus) for the Sun, the
//! Moon and a small catalog of bright stars.

pub mod body;
pub mod engine;
pub mod error;
pub mod lunar_phase;
pub mod moon;
pub mod observer;
pub mod oracle;
pub mod riseset;
pub mod stars;
pub mod sun;

pub use body::{ApparentPlace, Body};
pub use engine::AnalyticEphemeris;
pub use error::EphemError;
pub use lunar_phase::{
    SYNODIC_MONTH_DAYS, lunation_before, new_moon_instant, new_moon_jde, next_new_moon,
    previous_new_moon, search_new_moons,
};
pub use moon::{MoonPosition, moon_position};
pub use observer::{GeoLocation, ObserverConfig, RiseSetEvent};
pub use oracle::Ephemeris;
pub use riseset::{RiseSetConfig, next_rise_set, target_altitude_deg};
pub use stars::{ALL_STARS, Star};
pub use sun::{SunPosition, sun_position};
