//! Slice-based conversions with the naming and rounding web map code expects.
//!
//! Each function takes `[lng, lat]` or `[lng, lat, height]` (height ignored)
//! and returns a new `[lng, lat]`, rounded to 6 decimals, or `[x, y]` in
//! metres rounded to 2 decimals for Mercator.

use crate::error::ConvertError;
use crate::point::{LngLat, MercatorPoint};
use crate::proj::bd09::Bd09;
use crate::proj::gcj02::Gcj02;
use crate::proj::mercator::WebMercator;
use crate::proj::Projection;

fn apply(
    lnglat: &[f64],
    f: impl FnOnce(f64, f64) -> Result<(f64, f64), ConvertError>,
) -> Result<[f64; 2], ConvertError> {
    let p = LngLat::try_from(lnglat)?;
    let (x, y) = f(p.lng, p.lat)?;
    Ok(p.moved(x, y).to_array())
}

/// WGS84 → GCJ-02. Unchanged outside China.
pub fn wgs2gcj(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    apply(lnglat, |lng, lat| Gcj02::default().forward(lng, lat))
}

/// GCJ-02 → WGS84, single-step approximation. Unchanged outside China.
pub fn gcj2wgs(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    apply(lnglat, |lng, lat| Gcj02::default().inverse(lng, lat))
}

/// BD-09 → GCJ-02.
pub fn bd2gcj(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    apply(lnglat, |lng, lat| Bd09::default().inverse(lng, lat))
}

/// GCJ-02 → BD-09.
pub fn gcj2bd(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    apply(lnglat, |lng, lat| Bd09::default().forward(lng, lat))
}

/// BD-09 → WGS84, i.e. `gcj2wgs(bd2gcj(p))`.
pub fn bd2wgs(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    gcj2wgs(&bd2gcj(lnglat)?)
}

/// WGS84 → BD-09, i.e. `gcj2bd(wgs2gcj(p))`.
pub fn wgs2bd(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    gcj2bd(&wgs2gcj(lnglat)?)
}

/// WGS84 degrees → Web Mercator metres.
pub fn lnglat_to_mercator(lnglat: &[f64]) -> Result<[f64; 2], ConvertError> {
    apply(lnglat, |lng, lat| WebMercator::default().forward(lng, lat))
}

/// Web Mercator metres → WGS84 degrees.
pub fn mercator_to_lnglat(xy: &[f64]) -> Result<[f64; 2], ConvertError> {
    let p = MercatorPoint::try_from(xy)?;
    let (lng, lat) = WebMercator::default().inverse(p.x, p.y)?;
    Ok(LngLat::new(lng, lat).to_array())
}
