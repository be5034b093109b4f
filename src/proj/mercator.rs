//! Web Mercator (EPSG:3857) on the sphere, in the form web map clients use.
//!
//!   forward: x = λ·E/180, y = ln(tan((90 + φ)·π/360)) / (π/180) · E/180
//!   inverse: λ = x/E·180, φ = 180/π · (2·atan(exp(y/E·π)) − π/2)
//!
//! with E = 20037508.34, half the projected world width in metres (π·a of WGS84,
//! truncated to centimetres).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::ConvertError;
use crate::point::{ensure_finite, finite_result};
use crate::proj::common::Precision;
use crate::proj::Projection;

pub const HALF_EXTENT: f64 = 20_037_508.34;

/// WGS84 degrees ⇄ Web Mercator metres.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMercator {
    precision: Precision,
}

impl WebMercator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl Projection for WebMercator {
    fn name(&self) -> &'static str {
        "mercator"
    }

    fn forward(&self, lng: f64, lat: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("longitude", lng)?;
        ensure_finite("latitude", lat)?;

        let x = lng * HALF_EXTENT / 180.0;
        let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
        let y = y * HALF_EXTENT / 180.0;
        // |lat| >= 90 has no finite image
        ensure_finite("projected y", y)
            .map_err(|_| ConvertError::InvalidCoordinate(format!("latitude {lat} out of range")))?;

        finite_result(self.precision.metres(x), self.precision.metres(y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;

        let lng = x / HALF_EXTENT * 180.0;
        let lat = y / HALF_EXTENT * 180.0;
        let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - FRAC_PI_2);
        finite_result(self.precision.degrees(lng), self.precision.degrees(lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_origin() {
        let proj = WebMercator::default();
        let (x, y) = proj.forward(0.0, 0.0).unwrap();
        assert_eq!((x, y), (0.0, 0.0));
        // ln(tan(π/4)) is a hair below zero
        assert!(x.is_sign_positive() && y.is_sign_positive());
    }

    #[test]
    fn test_antimeridian_reference() {
        let proj = WebMercator::default();
        let (x, y) = proj.forward(180.0, 0.0).unwrap();
        assert_eq!(x, 20_037_508.34);
        assert_eq!(y, 0.0);
        assert!(y.is_sign_positive());
    }

    #[test]
    fn test_half_extent_is_truncated_wgs84_half_circumference() {
        assert_relative_eq!(HALF_EXTENT, PI * WGS84.a, epsilon = 0.01);
    }

    #[test]
    fn test_beijing_reference() {
        let proj = WebMercator::default();
        let (x, y) = proj.forward(116.404, 39.915).unwrap();
        assert_abs_diff_eq!(x, 12_958_034.0, epsilon = 0.005);
        assert_abs_diff_eq!(y, 4_853_597.99, epsilon = 0.005);
    }

    #[test]
    fn test_roundtrip() {
        let proj = WebMercator::default();
        let cases: &[(f64, f64)] = &[
            (116.404, 39.915),
            (-73.9857, 40.7484), // NYC
            (139.6917, 35.6895), // Tokyo
            (-180.0, 0.0),
            (151.2093, -33.8688), // Sydney
        ];
        for &(lng, lat) in cases {
            let (x, y) = proj.forward(lng, lat).unwrap();
            let (lng2, lat2) = proj.inverse(x, y).unwrap();
            assert_abs_diff_eq!(lng2, lng, epsilon = 1e-4);
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_metres_rounded_to_centimetres() {
        let proj = WebMercator::default();
        let (x, _) = proj.forward(121.4737, 31.2304).unwrap();
        assert_eq!(x, 13_522_390.43);

        let (x, _) = WebMercator::new(Precision::FULL)
            .forward(121.4737, 31.2304)
            .unwrap();
        assert_ne!(x, 13_522_390.43);
    }

    #[test]
    fn test_south_pole_rejected() {
        let proj = WebMercator::default();
        assert!(matches!(
            proj.forward(0.0, -90.0),
            Err(ConvertError::InvalidCoordinate(_))
        ));
        assert!(proj.forward(0.0, 95.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let proj = WebMercator::default();
        assert!(proj.forward(f64::NAN, 0.0).is_err());
        assert!(proj.inverse(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_huge_longitude_rejected() {
        let proj = WebMercator::default();
        assert!(matches!(
            proj.forward(1e303, 0.0),
            Err(ConvertError::InvalidCoordinate(_))
        ));
        assert!(WebMercator::new(Precision::FULL).forward(1e303, 0.0).is_err());
    }

    #[test]
    fn test_huge_inverse_stays_finite() {
        let proj = WebMercator::default();
        let (lng, lat) = proj.inverse(1e308, 1e308).unwrap();
        assert!(lng.is_finite());
        assert_eq!(lat, 90.0);
    }
}
