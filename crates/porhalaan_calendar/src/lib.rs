//! Batak cosmogram (porhalaan) calendar.
//!
//! Converts Gregorian dates into Batak lunar dates. The year opens on the
//! first new moon whose evening, seen from Lake Toba, shows Antares rising
//! and Betelgeuse setting within a few hours of sunset with the Moon still
//! up after the Sun. Months are counted in new moons from that epoch, days
//! from the latest new moon.
//!
//! All astronomy comes through the [`porhalaan_ephem::Ephemeris`] trait.

pub mod config;
pub mod error;
pub mod month_count;
pub mod names;
pub mod new_year;
pub mod translate;
pub mod visibility;

pub use config::{
    DEFAULT_MAX_LOOKBACK, LAKE_TOBA_ELEVATION_M, LAKE_TOBA_HORIZON_DEG, LAKE_TOBA_LATITUDE_DEG,
    LAKE_TOBA_LONGITUDE_DEG, OracleErrorPolicy, SearchConfig, VisibilityRule, lake_toba,
};
pub use error::CalendarError;
pub use month_count::{count_months_since, new_moon_at_or_before};
pub use names::{ALL_DAYS, ALL_MONTHS, BatakDay, BatakMonth};
pub use new_year::{find_new_year_start, locate_new_year};
pub use translate::{BatakDate, Converter, Explanation, gregorian_to_batak};
pub use visibility::{VisibilityReport, evaluate_new_moon, is_qualifying_new_moon};
