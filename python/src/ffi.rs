//! Host-facing functions.
//!
//! `compress` / `decompress` keep the raw calling convention: success shape
//! or a bare integer status. `deflate` / `inflate` raise `ZlibError` instead.
//! The engine runs with the GIL released; the output `Vec` becomes a Python
//! `bytes` object owned by the interpreter.

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use packflate_core::{compression, compress_bound as core_compress_bound, Inflated, ZStatus};

create_exception!(
    packflate,
    ZlibError,
    PyException,
    "zlib pass failed; args are (message, status code)."
);

fn to_py_err(err: packflate_core::ZlibError) -> PyErr {
    let status = err.status();
    ZlibError::new_err((format!("{}: {}", status.name(), err), status.code()))
}

fn inflated_to_py(py: Python<'_>, inflated: Inflated) -> (PyObject, usize) {
    let (data, consumed) = inflated.into_parts();
    (PyBytes::new_bound(py, &data).into_py(py), consumed)
}

/// compress(data) -> bytes | int
#[pyfunction]
fn compress(py: Python<'_>, data: &[u8]) -> PyObject {
    match py.allow_threads(|| compression::compress(data)) {
        Ok(out) => PyBytes::new_bound(py, &out).into_py(py),
        Err(e) => e.code().into_py(py),
    }
}

/// decompress(data, expected_len) -> (bytes, consumed) | int
#[pyfunction]
fn decompress(py: Python<'_>, data: &[u8], expected_len: usize) -> PyObject {
    match py.allow_threads(|| compression::decompress(data, expected_len)) {
        Ok(inflated) => inflated_to_py(py, inflated).into_py(py),
        Err(e) => e.code().into_py(py),
    }
}

/// deflate(data, level=None) -> bytes, raising ZlibError.
#[pyfunction]
#[pyo3(signature = (data, level=None))]
fn deflate(py: Python<'_>, data: &[u8], level: Option<u32>) -> PyResult<PyObject> {
    let config = compression::DeflateConfig::new(level);
    let out = py.allow_threads(|| compression::compress_with(data, &config))
        .map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &out).into_py(py))
}

/// inflate(data, expected_len) -> (bytes, consumed), raising ZlibError.
#[pyfunction]
fn inflate(py: Python<'_>, data: &[u8], expected_len: usize) -> PyResult<(PyObject, usize)> {
    let inflated = py.allow_threads(|| compression::decompress(data, expected_len))
        .map_err(to_py_err)?;
    Ok(inflated_to_py(py, inflated))
}

/// status_name(code) -> str | None
#[pyfunction]
fn status_name(code: i32) -> Option<&'static str> {
    ZStatus::name_for(code)
}

#[pyfunction]
fn compress_bound(len: usize) -> usize {
    core_compress_bound(len)
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compress, m)?)?;
    m.add_function(wrap_pyfunction!(decompress, m)?)?;
    m.add_function(wrap_pyfunction!(deflate, m)?)?;
    m.add_function(wrap_pyfunction!(inflate, m)?)?;
    m.add_function(wrap_pyfunction!(status_name, m)?)?;
    m.add_function(wrap_pyfunction!(compress_bound, m)?)?;

    m.add("ZlibError", py.get_type_bound::<ZlibError>())?;
    for status in ZStatus::ALL {
        m.add(status.name(), status.code())?;
    }
    Ok(())
}
