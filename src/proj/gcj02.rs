//! GCJ-02 datum shift.
//!
//!   forward: (λ, φ) → (λ + δλ, φ + δφ), δ from the Krasovsky offset polynomials
//!   inverse: (λ', φ') → (2λ' − (λ' + δλ(λ')), 2φ' − (φ' + δφ(φ')))
//!
//! The inverse is a single evaluation of the offset at the shifted point, not an
//! iteration, so a round trip drifts by up to a few metres.

use log::trace;

use crate::error::ConvertError;
use crate::point::{ensure_finite, finite_result};
use crate::proj::common::{gcj_offset, ChinaBounds, Precision};
use crate::proj::ellipsoid::{Ellipsoid, KRASOVSKY_1940};
use crate::proj::Projection;

/// WGS84 ⇄ GCJ-02.
#[derive(Clone, Copy, Debug)]
pub struct Gcj02 {
    ellipsoid: Ellipsoid,
    bounds: ChinaBounds,
    precision: Precision,
}

impl Gcj02 {
    pub fn new(precision: Precision) -> Self {
        Self {
            ellipsoid: KRASOVSKY_1940,
            bounds: ChinaBounds::default(),
            precision,
        }
    }

    pub fn with_bounds(mut self, bounds: ChinaBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> &ChinaBounds {
        &self.bounds
    }

    fn passthrough(&self, lng: f64, lat: f64) -> bool {
        if self.bounds.is_out_of_china(lng, lat) {
            trace!("({lng}, {lat}) outside China bounds, no GCJ-02 offset");
            true
        } else {
            false
        }
    }
}

impl Default for Gcj02 {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}

impl Projection for Gcj02 {
    fn name(&self) -> &'static str {
        "gcj02"
    }

    fn forward(&self, lng: f64, lat: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("longitude", lng)?;
        ensure_finite("latitude", lat)?;
        if self.passthrough(lng, lat) {
            return Ok((lng, lat));
        }

        let (dlng, dlat) = gcj_offset(&self.ellipsoid, lng, lat);
        finite_result(
            self.precision.degrees(lng + dlng),
            self.precision.degrees(lat + dlat),
        )
    }

    fn inverse(&self, lng: f64, lat: f64) -> Result<(f64, f64), ConvertError> {
        ensure_finite("longitude", lng)?;
        ensure_finite("latitude", lat)?;
        if self.passthrough(lng, lat) {
            return Ok((lng, lat));
        }

        let (dlng, dlat) = gcj_offset(&self.ellipsoid, lng, lat);
        let shifted_lng = lng + dlng;
        let shifted_lat = lat + dlat;
        finite_result(
            self.precision.degrees(lng * 2.0 - shifted_lng),
            self.precision.degrees(lat * 2.0 - shifted_lat),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_beijing_reference() {
        let gcj = Gcj02::default();
        let (lng, lat) = gcj.forward(116.404, 39.915).unwrap();
        assert_abs_diff_eq!(lng, 116.410_244, epsilon = 1e-6);
        assert_abs_diff_eq!(lat, 39.916_404, epsilon = 1e-6);
    }

    #[test]
    fn test_offset_applied_inside_china() {
        let gcj = Gcj02::default();
        let cases: &[(f64, f64)] = &[
            (116.404, 39.915),  // Beijing
            (121.4737, 31.2304), // Shanghai
            (113.2644, 23.1291), // Guangzhou
            (87.6168, 43.8256),  // Urumqi
            (126.6424, 45.7567), // Harbin
        ];
        for &(lng, lat) in cases {
            let out = gcj.forward(lng, lat).unwrap();
            assert_ne!(out, (lng, lat), "no offset at ({lng}, {lat})");
        }
    }

    #[test]
    fn test_passthrough_outside_china_is_exact() {
        let gcj = Gcj02::default();
        let cases: &[(f64, f64)] = &[
            (-122.4194, 37.7749),       // San Francisco
            (2.352_222_222_2, 48.8566), // Paris, more digits than the rounding keeps
            (139.6917, 35.6895),        // Tokyo
            (116.404, 56.0),
        ];
        for &(lng, lat) in cases {
            assert_eq!(gcj.forward(lng, lat).unwrap(), (lng, lat));
            assert_eq!(gcj.inverse(lng, lat).unwrap(), (lng, lat));
        }
    }

    #[test]
    fn test_inverse_roughly_undoes_forward() {
        let gcj = Gcj02::default();
        let (glng, glat) = gcj.forward(121.4737, 31.2304).unwrap();
        let (lng, lat) = gcj.inverse(glng, glat).unwrap();
        // Single-step inverse: metres, not millimetres
        assert_abs_diff_eq!(lng, 121.4737, epsilon = 1e-4);
        assert_abs_diff_eq!(lat, 31.2304, epsilon = 1e-4);
    }

    #[test]
    fn test_full_precision_keeps_digits() {
        let gcj = Gcj02::new(Precision::FULL);
        let (lng, _) = gcj.forward(116.404, 39.915).unwrap();
        let rounded = crate::proj::common::round_to(lng, 6);
        assert_ne!(lng, rounded);
    }

    #[test]
    fn test_oversized_precision_stays_finite() {
        let gcj = Gcj02::new(Precision::new(Some(400), None));
        let (lng, lat) = gcj.forward(116.404, 39.915).unwrap();
        assert!(lng.is_finite() && lat.is_finite());
        assert_abs_diff_eq!(lng, 116.410_244, epsilon = 1e-6);
        assert_abs_diff_eq!(lat, 39.916_404, epsilon = 1e-6);
    }

    #[test]
    fn test_custom_bounds() {
        let gcj = Gcj02::default().with_bounds(ChinaBounds::new(115.0, 118.0, 39.0, 41.0));
        assert_eq!(gcj.forward(121.4737, 31.2304).unwrap(), (121.4737, 31.2304));
        assert_ne!(gcj.forward(116.404, 39.915).unwrap(), (116.404, 39.915));
    }

    #[test]
    fn test_nan_rejected() {
        let gcj = Gcj02::default();
        assert!(matches!(
            gcj.forward(f64::NAN, 39.9),
            Err(ConvertError::InvalidCoordinate(_))
        ));
        assert!(gcj.inverse(116.4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_batch_stops_on_error() {
        let gcj = Gcj02::default();
        let mut coords = vec![(116.404, 39.915), (f64::NAN, 0.0)];
        assert!(gcj.forward_batch(&mut coords).is_err());

        let mut coords = vec![(116.404, 39.915), (-122.4194, 37.7749)];
        gcj.forward_batch(&mut coords).unwrap();
        assert_eq!(coords[1], (-122.4194, 37.7749));
        assert_eq!(coords[0], gcj.forward(116.404, 39.915).unwrap());
    }
}
