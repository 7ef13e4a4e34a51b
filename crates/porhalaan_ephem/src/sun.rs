//! Apparent geocentric Sun, low precision.
//!
//! Meeus, _Astronomical Algorithms_, Ch. 25 (accuracy ~0.01°), with the
//! nutation of `porhalaan_frames` instead of the one-term shortcut.

use porhalaan_frames::{
    EquatorialCoords, ecliptic_to_equatorial, normalize_deg, nutation, true_obliquity_deg,
};
use porhalaan_time::jd_to_centuries;

/// Solar semidiameter at 1 AU in arcseconds.
const SEMIDIAMETER_1AU_ARCSEC: f64 = 959.63;

/// Solar horizontal parallax at 1 AU in arcseconds.
const PARALLAX_1AU_ARCSEC: f64 = 8.794;

/// Annual aberration constant in degrees (20.4898″).
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Sun position at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic longitude of date, degrees.
    pub longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
    /// Apparent equatorial coordinates of date.
    pub equatorial: EquatorialCoords,
}

impl SunPosition {
    pub fn semidiameter_deg(&self) -> f64 {
        SEMIDIAMETER_1AU_ARCSEC / self.distance_au / 3600.0
    }

    pub fn parallax_deg(&self) -> f64 {
        PARALLAX_1AU_ARCSEC / self.distance_au / 3600.0
    }
}

/// Apparent Sun at a TT Julian Date.
pub fn sun_position(jd_tt: f64) -> SunPosition {
    let t = jd_to_centuries(jd_tt);
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let nut = nutation(t);
    let lon = normalize_deg(true_lon + nut.longitude_deg - ABERRATION_DEG / r);
    let eps = true_obliquity_deg(t, &nut);

    SunPosition {
        longitude_deg: lon,
        distance_au: r,
        equatorial: ecliptic_to_equatorial(lon, 0.0, eps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: α = 198.38083°, δ = −7.78507°, R = 0.99766 AU
        let sun = sun_position(2_448_908.5);
        let ra_deg = sun.equatorial.ra_rad.to_degrees();
        assert!((ra_deg - 198.380_83).abs() < 0.01, "α = {ra_deg}");
        assert!(
            (sun.equatorial.dec_deg() + 7.785_07).abs() < 0.01,
            "δ = {}",
            sun.equatorial.dec_deg()
        );
        assert!((sun.distance_au - 0.997_66).abs() < 1e-4);
        assert!((sun.longitude_deg - 199.909).abs() < 0.01);
    }

    #[test]
    fn june_solstice_declination() {
        // 2024-06-20 20:51 UTC solstice
        let sun = sun_position(2_460_482.369);
        assert!((sun.equatorial.dec_deg() - 23.44).abs() < 0.02);
    }

    #[test]
    fn semidiameter_near_sixteen_arcmin() {
        let sun = sun_position(2_451_545.0);
        let sd_arcmin = sun.semidiameter_deg() * 60.0;
        assert!((sd_arcmin - 16.26).abs() < 0.05, "sd = {sd_arcmin}'");
        assert!(sun.parallax_deg() * 3600.0 < 9.0);
    }
}
