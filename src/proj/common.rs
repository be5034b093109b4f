//! Common helpers for datum-shift math (China bounds, offset polynomials, rounding).

use std::f64::consts::PI;

use super::ellipsoid::Ellipsoid;

/// Decimal digits kept after each conversion step.
///
/// `None` disables rounding for that unit. Digits are capped at
/// [`Precision::MAX_DIGITS`], past which an `f64` has nothing left to round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precision {
    degree_digits: Option<i32>,
    metre_digits: Option<i32>,
}

impl Precision {
    pub const MAX_DIGITS: u32 = 15;

    /// 6 digits for degrees, 2 for metres, as web map clients emit them.
    pub const LEGACY: Precision = Precision {
        degree_digits: Some(6),
        metre_digits: Some(2),
    };

    /// No rounding at all.
    pub const FULL: Precision = Precision {
        degree_digits: None,
        metre_digits: None,
    };

    pub fn new(degree_digits: Option<u32>, metre_digits: Option<u32>) -> Self {
        let cap = |digits: u32| digits.min(Self::MAX_DIGITS) as i32;
        Self {
            degree_digits: degree_digits.map(cap),
            metre_digits: metre_digits.map(cap),
        }
    }

    pub fn degree_digits(&self) -> Option<u32> {
        self.degree_digits.map(|d| d as u32)
    }

    pub fn metre_digits(&self) -> Option<u32> {
        self.metre_digits.map(|d| d as u32)
    }

    pub fn degrees(&self, value: f64) -> f64 {
        match self.degree_digits {
            Some(digits) => round_to(value, digits),
            None => value,
        }
    }

    pub fn metres(&self, value: f64) -> f64 {
        match self.metre_digits {
            Some(digits) => round_to(value, digits),
            None => value,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::LEGACY
    }
}

/// Round half away from zero to `digits` decimal places.
///
/// Values whose scaled form overflows are returned unchanged, and a rounded
/// negative zero comes back as `0.0`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    if !factor.is_finite() || factor == 0.0 || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor + 0.0
}

/// Rectangle outside of which no GCJ-02 offset is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChinaBounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl ChinaBounds {
    pub const fn new(min_lng: f64, max_lng: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            max_lng,
            min_lat,
            max_lat,
        }
    }

    /// Edges count as inside.
    pub fn is_out_of_china(&self, lng: f64, lat: f64) -> bool {
        lng < self.min_lng || lng > self.max_lng || lat < self.min_lat || lat > self.max_lat
    }
}

impl Default for ChinaBounds {
    fn default() -> Self {
        CHINA
    }
}

pub const CHINA: ChinaBounds = ChinaBounds::new(72.004, 137.8347, 0.8293, 55.8271);

/// Latitude component of the GCJ-02 offset polynomial, on coordinates
/// relative to (105°, 35°).
pub fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude component of the GCJ-02 offset polynomial.
pub fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Offset `(dlng, dlat)` in degrees that GCJ-02 adds at the given position.
pub fn gcj_offset(ellipsoid: &Ellipsoid, lng: f64, lat: f64) -> (f64, f64) {
    let dlat = transform_lat(lng - 105.0, lat - 35.0);
    let dlng = transform_lng(lng - 105.0, lat - 35.0);

    let radlat = lat / 180.0 * PI;
    let magic = 1.0 - ellipsoid.e2 * radlat.sin() * radlat.sin();
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.0) / ((ellipsoid.a * (1.0 - ellipsoid.e2)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (ellipsoid.a / sqrtmagic * radlat.cos() * PI);
    (dlng, dlat)
}
