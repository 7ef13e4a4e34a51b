//! Sidereal time and hour angles.
//!
//! The rise/set solver turns a body's right ascension into a local hour
//! angle through these functions. Inputs are UTC Julian Dates standing in
//! for UT1.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth rotation rate relative to the mean equinox, in revolutions per UT day.
const SIDEREAL_REVS_PER_DAY: f64 = 1.002_737_811_911_354_6;

/// Earth rotation rate in radians per UT day.
pub const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * SIDEREAL_REVS_PER_DAY;

/// Earth Rotation Angle, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + SIDEREAL_REVS_PER_DAY * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t.powi(2)
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_rad: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_rad).rem_euclid(TAU)
}

/// Local hour angle of a body with right ascension `ra_rad`, in (-π, π].
///
/// Negative east of the meridian (before transit), positive after.
pub fn hour_angle_rad(jd_ut: f64, longitude_east_rad: f64, ra_rad: f64) -> f64 {
    wrap_pi(local_sidereal_time_rad(jd_ut, longitude_east_rad) - ra_rad)
}

/// Wrap an angle in radians into (-π, π].
pub fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}
