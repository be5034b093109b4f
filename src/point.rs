//! Coordinate value types.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Geographic position in degrees, with an optional height in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
    pub height: Option<f64>,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            height: None,
        }
    }

    pub const fn with_height(lng: f64, lat: f64, height: f64) -> Self {
        Self {
            lng,
            lat,
            height: Some(height),
        }
    }

    /// Fails with `InvalidCoordinate` if any component is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConvertError> {
        ensure_finite("longitude", self.lng)?;
        ensure_finite("latitude", self.lat)?;
        if let Some(h) = self.height {
            ensure_finite("height", h)?;
        }
        Ok(())
    }

    /// Same position with new horizontal components, keeping the height.
    pub fn moved(&self, lng: f64, lat: f64) -> Self {
        Self {
            lng,
            lat,
            height: self.height,
        }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<LngLat> for (f64, f64) {
    fn from(p: LngLat) -> Self {
        (p.lng, p.lat)
    }
}

impl TryFrom<&[f64]> for LngLat {
    type Error = ConvertError;

    /// `[lng, lat]` or `[lng, lat, height]`; extra elements are ignored.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let point = match values {
            [lng, lat] => LngLat::new(*lng, *lat),
            [lng, lat, height, ..] => LngLat::with_height(*lng, *lat, *height),
            _ => {
                return Err(ConvertError::InvalidCoordinate(format!(
                    "expected at least 2 values, got {}",
                    values.len()
                )))
            }
        };
        point.validate()?;
        Ok(point)
    }
}

impl FromStr for LngLat {
    type Err = ConvertError;

    /// Parses `"lng,lat"` or `"lng,lat,height"`, as returned by POI search services.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|e| {
                    ConvertError::InvalidCoordinate(format!("{:?} in {s:?}: {e}", part.trim()))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.len() > 3 {
            return Err(ConvertError::InvalidCoordinate(format!(
                "too many components in {s:?}"
            )));
        }
        LngLat::try_from(values.as_slice())
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.height {
            Some(h) => write!(f, "{},{},{}", self.lng, self.lat, h),
            None => write!(f, "{},{}", self.lng, self.lat),
        }
    }
}

/// Web Mercator position in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)
    }
}

impl TryFrom<&[f64]> for MercatorPoint {
    type Error = ConvertError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y, ..] => {
                let point = MercatorPoint::new(*x, *y);
                point.validate()?;
                Ok(point)
            }
            _ => Err(ConvertError::InvalidCoordinate(format!(
                "expected at least 2 values, got {}",
                values.len()
            ))),
        }
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), ConvertError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvertError::InvalidCoordinate(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Rejects a computed pair that overflowed, so no projection hands out `inf` or `NaN`.
pub(crate) fn finite_result(x: f64, y: f64) -> Result<(f64, f64), ConvertError> {
    if x.is_finite() && y.is_finite() {
        Ok((x, y))
    } else {
        Err(ConvertError::InvalidCoordinate(format!(
            "result ({x}, {y}) is not finite"
        )))
    }
}
