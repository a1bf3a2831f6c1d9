// Python-binding (bygges kun med `--features python`).

use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::cli;
use crate::dispatch::read_package;
use crate::errors::{ReportError, WorkoutError};

fn to_py_err(e: WorkoutError) -> PyErr {
    match e {
        WorkoutError::NotImplemented(_) => PyNotImplementedError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Én pakke → ferdig formatert linje.
#[pyfunction]
fn training_info(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(to_py_err)?;
    Ok(workout.summarize().get_message())
}

/// JSON-liste med pakker → JSON-liste med InfoMessage-objekter.
///
/// Første ugyldige pakke gir ValueError.
#[pyfunction]
fn summarize_json(json_in: &str) -> PyResult<String> {
    cli::summarize_json(json_in).map_err(|e| match e {
        ReportError::Package { source: WorkoutError::NotImplemented(_), .. } => {
            PyNotImplementedError::new_err(e.to_string())
        }
        _ => PyValueError::new_err(e.to_string()),
    })
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(training_info, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_json, m)?)?;
    Ok(())
}
