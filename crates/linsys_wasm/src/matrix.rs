//! Dense matrix wrapper exposed to JavaScript.

use anyhow::{bail, Context};
use js_sys::Float64Array;
use linsys_core::Matrix;
use wasm_bindgen::prelude::*;

use crate::system::index_from_js;

#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmMatrix {
    pub(crate) matrix: Matrix<f64>,
}

/// Builds a matrix from a row-major buffer.
pub(crate) fn build_matrix(rows: usize, cols: usize, data: &[f64]) -> anyhow::Result<Matrix<f64>> {
    let Some(len) = rows.checked_mul(cols) else {
        bail!("A {}x{} matrix does not fit in memory.", rows, cols);
    };
    if len != data.len() {
        bail!(
            "Buffer of length {} cannot fill a {}x{} matrix.",
            data.len(),
            rows,
            cols
        );
    }
    if cols == 0 {
        return Ok(Matrix::zeros(rows, 0));
    }
    let rows = data.chunks(cols).map(<[f64]>::to_vec).collect();
    Ok(Matrix::from_rows(rows)?)
}

impl WasmMatrix {
    pub(crate) fn entry(&self, i: i32, j: i32) -> anyhow::Result<f64> {
        let row = index_from_js(i, self.matrix.nrows())?;
        let col = index_from_js(j, self.matrix.ncols())?;
        Ok(self.matrix.get(row, col)?)
    }

    pub(crate) fn inverted(&self) -> anyhow::Result<WasmMatrix> {
        let matrix = self.matrix.inverse().context("Matrix inversion failed")?;
        Ok(WasmMatrix { matrix })
    }

    pub(crate) fn product(&self, other: &WasmMatrix) -> anyhow::Result<WasmMatrix> {
        let matrix = self
            .matrix
            .multiply(&other.matrix)
            .context("Matrix product failed")?;
        Ok(WasmMatrix { matrix })
    }
}

fn js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

#[wasm_bindgen]
impl WasmMatrix {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<WasmMatrix, JsValue> {
        console_error_panic_hook::set_once();

        let matrix = build_matrix(rows, cols, &data).map_err(js_error)?;
        Ok(WasmMatrix { matrix })
    }

    pub fn identity(n: usize) -> WasmMatrix {
        WasmMatrix {
            matrix: Matrix::identity(n),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn get(&self, i: i32, j: i32) -> Result<f64, JsValue> {
        self.entry(i, j).map_err(js_error)
    }

    /// Entries in row-major order.
    pub fn data(&self) -> Float64Array {
        Float64Array::from(self.matrix.as_slice())
    }

    pub fn determinant(&self) -> Result<f64, JsValue> {
        self.matrix
            .det()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn transpose(&self) -> WasmMatrix {
        WasmMatrix {
            matrix: self.matrix.transpose(),
        }
    }

    pub fn inverse(&self) -> Result<WasmMatrix, JsValue> {
        self.inverted().map_err(js_error)
    }

    pub fn multiply(&self, other: &WasmMatrix) -> Result<WasmMatrix, JsValue> {
        self.product(other).map_err(js_error)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.matrix.to_string()
    }
}
