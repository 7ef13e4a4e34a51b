//! Coordinate helpers for the analytic ephemeris.
//!
//! Provides angle normalization and sexagesimal parsing, obliquity,
//! low-precision nutation, J2000 → date precession, and the ecliptic,
//! equatorial and horizon relations used by the rise/set solver.

pub mod angles;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use angles::{
    AngleParseError, format_sexagesimal_deg, normalize_deg, parse_sexagesimal_deg,
};
pub use nutation::{Nutation, lunar_node_deg, nutation};
pub use obliquity::{mean_obliquity_deg, true_obliquity_deg};
pub use precession::{precess_from_j2000, precession_angles};
pub use spherical::{
    EquatorialCoords, altitude_rad, cos_hour_angle_at_altitude, ecliptic_to_equatorial,
};
