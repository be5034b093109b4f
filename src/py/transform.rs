//! PyO3 bindings for datum and projection conversion.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::proj::pipeline::Pipeline;

/// Convert arrays of coordinates from one CRS to another.
///
/// Args:
///     x: 1D array of x coordinates (longitude or easting).
///     y: 1D array of y coordinates (latitude or northing).
///     src_crs: Source CRS name (e.g. "wgs84", "gcj02", "bd09", "EPSG:3857").
///     dst_crs: Destination CRS name.
///
/// Returns:
///     Tuple of (x_out, y_out) arrays in the destination CRS.
#[pyfunction]
#[pyo3(signature = (x, y, src_crs, dst_crs))]
#[allow(clippy::type_complexity)]
pub fn transform_points<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    src_crs: &str,
    dst_crs: &str,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let xs = x.as_array().to_vec();
    let ys = y.as_array().to_vec();

    let pipeline =
        Pipeline::from_names(src_crs, dst_crs).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let (xs, ys) = py
        .allow_threads(move || pipeline.transform_columns(&xs, &ys))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    ))
}

/// Convert a single (x, y) pair from one CRS to another.
#[pyfunction]
#[pyo3(signature = (x, y, src_crs, dst_crs))]
pub fn convert_point(x: f64, y: f64, src_crs: &str, dst_crs: &str) -> PyResult<(f64, f64)> {
    Pipeline::from_names(src_crs, dst_crs)
        .and_then(|pipeline| pipeline.transform(x, y))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
