use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::transform_points, m)?)?;
    m.add_function(wrap_pyfunction!(transform::convert_point, m)?)?;
    Ok(())
}
