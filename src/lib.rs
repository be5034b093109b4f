//! Coordinate conversion between the datums used by Chinese web maps
//! (WGS84, GCJ-02, BD-09) and the Web Mercator projection.

pub mod convert;
pub mod error;
pub mod point;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use convert::{
    bd2gcj, bd2wgs, gcj2bd, gcj2wgs, lnglat_to_mercator, mercator_to_lnglat, wgs2bd, wgs2gcj,
};
pub use error::{ConvertError, PipelineError};
pub use point::{LngLat, MercatorPoint};
pub use proj::crs::Crs;
pub use proj::pipeline::Pipeline;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn coordconv(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    py::register(m)
}
