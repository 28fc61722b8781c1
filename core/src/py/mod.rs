use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyze_acwr::analyze_acwr_json;

/// Kjør full ACWR-analyse fra JSON-input.
/// Samme kontrakt som `analyze_acwr_json`; resultatet returneres som
/// JSON-streng og deserialiseres på Python-siden.
#[pyfunction]
fn analyze_acwr(input_json: &str) -> PyResult<String> {
    analyze_acwr_json(input_json).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

#[pymodule]
fn coachgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_acwr, m)?)?;
    Ok(())
}
