//! Spherical coordinate types and conversions.
//!
//! Ecliptic → equatorial rotation and the altitude / hour-angle relations
//! of the horizon system (Meeus, _Astronomical Algorithms_, Ch. 13).

use std::f64::consts::TAU;

use crate::nutation::Nutation;

/// Equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub dec_rad: f64,
}

impl EquatorialCoords {
    /// Create coordinates, wrapping RA into [0, 2π).
    pub fn new(ra_rad: f64, dec_rad: f64) -> Self {
        Self {
            ra_rad: ra_rad.rem_euclid(TAU),
            dec_rad,
        }
    }

    /// Build from right ascension in hours and declination in degrees.
    pub fn from_hours_deg(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new((ra_hours * 15.0).to_radians(), dec_deg.to_radians())
    }

    /// Right ascension in hours.
    pub fn ra_hours(&self) -> f64 {
        self.ra_rad.to_degrees() / 15.0
    }

    /// Declination in degrees.
    pub fn dec_deg(&self) -> f64 {
        self.dec_rad.to_degrees()
    }

    /// Apply nutation in right ascension and declination (Meeus Eq. 23.1).
    ///
    /// `obliquity_deg` is the true obliquity of date. Breaks down within a
    /// few arcminutes of the celestial poles, where `tan δ` diverges.
    pub fn with_nutation(&self, nutation: &Nutation, obliquity_deg: f64) -> Self {
        let eps = obliquity_deg.to_radians();
        let dpsi = nutation.longitude_deg.to_radians();
        let deps = nutation.obliquity_deg.to_radians();
        let (sin_a, cos_a) = self.ra_rad.sin_cos();
        let tan_d = self.dec_rad.tan();

        let dra = (eps.cos() + eps.sin() * sin_a * tan_d) * dpsi - cos_a * tan_d * deps;
        let ddec = eps.sin() * cos_a * dpsi + sin_a * deps;
        Self::new(self.ra_rad + dra, self.dec_rad + ddec)
    }
}

/// Convert ecliptic longitude/latitude (degrees) to equatorial coordinates.
///
/// `obliquity_deg` selects the frame: mean obliquity for mean coordinates,
/// true obliquity for apparent ones.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let ra = (lon.sin() * cos_e - lat.tan() * sin_e).atan2(lon.cos());
    let dec = (lat.sin() * cos_e + lat.cos() * sin_e * lon.sin())
        .clamp(-1.0, 1.0)
        .asin();
    EquatorialCoords::new(ra, dec)
}

/// Altitude above the geometric horizon for a given hour angle.
///
/// All arguments and the result are in radians.
pub fn altitude_rad(hour_angle_rad: f64, dec_rad: f64, latitude_rad: f64) -> f64 {
    (latitude_rad.sin() * dec_rad.sin()
        + latitude_rad.cos() * dec_rad.cos() * hour_angle_rad.cos())
    .clamp(-1.0, 1.0)
    .asin()
}

/// Cosine of the hour angle at which a body reaches `altitude_rad`.
///
/// Values above 1 mean the body never climbs to that altitude; values below
/// −1 mean it never sinks to it.
pub fn cos_hour_angle_at_altitude(altitude_rad: f64, dec_rad: f64, latitude_rad: f64) -> f64 {
    (altitude_rad.sin() - latitude_rad.sin() * dec_rad.sin())
        / (latitude_rad.cos() * dec_rad.cos())
}
