//! Obliquity of the ecliptic.
//!
//! Source: Meeus, _Astronomical Algorithms_, Eq. 22.2 (IAU 1980 polynomial),
//! accurate to 0.01″ within a few centuries of J2000.

use crate::nutation::Nutation;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(t: f64, nutation: &Nutation) -> f64 {
    mean_obliquity_deg(t) + nutation.obliquity_deg
}
