//! Precession of equatorial coordinates from J2000.0 to the equinox of date.
//!
//! Rigorous rotation with the IAU 1976 angles ζ, z, θ (Meeus, _Astronomical
//! Algorithms_, Eqs. 21.3–21.4). Used to carry catalog star positions to
//! the date of a rise/set query.

use crate::spherical::EquatorialCoords;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Precession angles `(ζ, z, θ)` in radians for `t` centuries since J2000.0.
pub fn precession_angles(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let zeta = 2306.2181 * t + 0.30188 * t2 + 0.017998 * t3;
    let z = 2306.2181 * t + 1.09468 * t2 + 0.018203 * t3;
    let theta = 2004.3109 * t - 0.42665 * t2 - 0.041833 * t3;
    (zeta * ARCSEC_TO_RAD, z * ARCSEC_TO_RAD, theta * ARCSEC_TO_RAD)
}

/// Precess J2000.0 mean coordinates to the mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn precess_from_j2000(coords: &EquatorialCoords, t: f64) -> EquatorialCoords {
    let (zeta, z, theta) = precession_angles(t);
    let (sin_d0, cos_d0) = coords.dec_rad.sin_cos();
    let (sin_th, cos_th) = theta.sin_cos();
    let ra_z = coords.ra_rad + zeta;

    let a = cos_d0 * ra_z.sin();
    let b = cos_th * cos_d0 * ra_z.cos() - sin_th * sin_d0;
    let c = sin_th * cos_d0 * ra_z.cos() + cos_th * sin_d0;

    EquatorialCoords::new(a.atan2(b) + z, c.clamp(-1.0, 1.0).asin())
}
