pub mod bd09;
pub mod common;
pub mod crs;
pub mod ellipsoid;
pub mod gcj02;
pub mod mercator;
pub mod pipeline;

use crate::error::ConvertError;

/// A coordinate conversion with a forward and an approximate inverse direction.
///
/// All coordinates are in degrees except projected ones, which are in metres.
pub trait Projection: Send + Sync {
    /// Short name used in logs and pipeline plans.
    fn name(&self) -> &'static str;

    fn forward(&self, x: f64, y: f64) -> Result<(f64, f64), ConvertError>;

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ConvertError>;

    /// Batch forward transform, in place. Stops at the first invalid coordinate.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ConvertError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ConvertError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }
}
