//! Low-precision nutation in longitude and obliquity.
//!
//! Four-term series from Meeus, _Astronomical Algorithms_, Ch. 22
//! (accuracy 0.5″ in Δψ, 0.1″ in Δε). The rise/set times it feeds are
//! insensitive at this level; the full IAU 2000B series is unnecessary.

/// Nutation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude, Δψ.
    pub longitude_deg: f64,
    /// Nutation in obliquity, Δε.
    pub obliquity_deg: f64,
}

/// Longitude of the Moon's mean ascending node in degrees (not normalized).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn lunar_node_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0
}

/// Nutation at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = lunar_node_deg(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps_arcsec = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_deg: dpsi_arcsec / 3600.0,
        obliquity_deg: deps_arcsec / 3600.0,
    }
}
