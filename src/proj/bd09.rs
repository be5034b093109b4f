//! BD-09, Baidu's polar correction on top of GCJ-02.
//!
//!   forward: z = √(λ² + φ²) + 2e-5·sin(φ·x_pi), θ = atan2(φ, λ) + 3e-6·cos(λ·x_pi)
//!            (λ', φ') = (z·cos θ + 0.0065, z·sin θ + 0.006)
//!   inverse: shift by (−0.0065, −0.006) first, then subtract the same corrections.
//!
//! Unlike GCJ-02 there is no China bounding check; the correction applies everywhere.

use crate::error::ConvertError;
use crate::point::{ensure_finite, finite_result};
use crate::proj::common::Precision;
use crate::proj::Projection;

/// The legacy literal, slightly more digits than `f64` holds.
#[allow(clippy::excessive_precision)]
pub const X_PI: f64 = 3.14159265358979324 * 3000.0 / 180.0;

const LNG_SHIFT: f64 = 0.0065;
const LAT_SHIFT: f64 = 0.006;

/// GCJ-02 ⇄ BD-09.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bd09 {
    precision: Precision,
}

impl Bd09 {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl Projection for Bd09 {
    fn name(&self) -> &'static str {
        "bd09"
    }

    fn forward(&self, lng: f64, lat: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("longitude", lng)?;
        ensure_finite("latitude", lat)?;

        let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
        let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
        finite_result(
            self.precision.degrees(z * theta.cos() + LNG_SHIFT),
            self.precision.degrees(z * theta.sin() + LAT_SHIFT),
        )
    }

    fn inverse(&self, lng: f64, lat: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("longitude", lng)?;
        ensure_finite("latitude", lat)?;

        let x = lng - LNG_SHIFT;
        let y = lat - LAT_SHIFT;
        let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
        let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
        finite_result(
            self.precision.degrees(z * theta.cos()),
            self.precision.degrees(z * theta.sin()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_beijing_reference() {
        let bd = Bd09::default();
        let (lng, lat) = bd.forward(116.404, 39.915).unwrap();
        assert_abs_diff_eq!(lng, 116.410_369, epsilon = 1e-6);
        assert_abs_diff_eq!(lat, 39.921_337, epsilon = 1e-6);

        let (lng, lat) = bd.inverse(116.404, 39.915).unwrap();
        assert_abs_diff_eq!(lng, 116.397_627, epsilon = 1e-6);
        assert_abs_diff_eq!(lat, 39.908_657, epsilon = 1e-6);
    }

    #[test]
    fn test_forward_inverse_reconstructs() {
        let bd = Bd09::default();
        let cases: &[(f64, f64)] = &[
            (116.404, 39.915),
            (121.4737, 31.2304),
            (104.0665, 30.5723), // Chengdu
            (91.1409, 29.6456),  // Lhasa
        ];
        for &(lng, lat) in cases {
            let (glng, glat) = bd.inverse(lng, lat).unwrap();
            let (lng2, lat2) = bd.forward(glng, glat).unwrap();
            assert_abs_diff_eq!(lng2, lng, epsilon = 1e-4);
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_applies_outside_china() {
        let bd = Bd09::default();
        let (lng, lat) = bd.forward(-122.4194, 37.7749).unwrap();
        assert_ne!((lng, lat), (-122.4194, 37.7749));
        assert_abs_diff_eq!(lng, -122.4194, epsilon = 1e-2);
        assert_abs_diff_eq!(lat, 37.7749, epsilon = 1e-2);
    }

    #[test]
    fn test_infinite_rejected() {
        let bd = Bd09::default();
        assert!(bd.forward(f64::INFINITY, 0.0).is_err());
        assert!(bd.inverse(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_overflowing_input_rejected() {
        let bd = Bd09::default();
        assert!(matches!(
            bd.forward(1e200, 1e200),
            Err(ConvertError::InvalidCoordinate(_))
        ));
        assert!(bd.inverse(1e200, 1e200).is_err());
        assert!(Bd09::new(Precision::FULL).forward(1e200, 1e200).is_err());
    }
}
