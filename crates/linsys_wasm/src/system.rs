//! Linear system wrapper exposed to JavaScript.

use anyhow::{bail, Context};
use js_sys::Float64Array;
use linsys_core::report::solve_and_verify;
use linsys_core::{Equation, SolveMethod, SolveSettings, System, Vector};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmLinearSystem {
    pub(crate) system: System<f64>,
}

/// Splits a row-major coefficient buffer into one equation per right-hand side.
pub(crate) fn build_system(coefficients: &[f64], rhs: &[f64]) -> anyhow::Result<System<f64>> {
    let rows = rhs.len();
    if rows == 0 {
        if !coefficients.is_empty() {
            bail!("Coefficients were given without right-hand sides.");
        }
        return Ok(System::new(Vec::new()));
    }
    if coefficients.len() % rows != 0 {
        bail!(
            "Coefficient buffer of length {} does not split into {} equations.",
            coefficients.len(),
            rows
        );
    }
    let cols = coefficients.len() / rows;
    let equations = rhs
        .iter()
        .enumerate()
        .map(|(i, &r)| Equation::from_vec(coefficients[i * cols..(i + 1) * cols].to_vec(), r))
        .collect();
    Ok(System::new(equations))
}

/// Converts a JavaScript index, which may be negative, into a checked `usize`.
pub(crate) fn index_from_js(index: i32, len: usize) -> anyhow::Result<usize> {
    if index < 0 {
        bail!("Index {} is out of bounds for dimension {}", index, len);
    }
    Ok(index as usize)
}

pub(crate) fn parse_method(name: &str) -> anyhow::Result<SolveMethod> {
    match name {
        "inverse" => Ok(SolveMethod::Inverse),
        "elimination" => Ok(SolveMethod::Elimination),
        _ => bail!("Unknown solve method: {}", name),
    }
}

fn js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

impl WasmLinearSystem {
    pub(crate) fn solve_values(&self, method: SolveMethod) -> anyhow::Result<Vec<f64>> {
        let solution = self
            .system
            .solve_with(method)
            .context("Linear solve failed")?;
        Ok(solution.into_vec())
    }

    pub(crate) fn plug_value(&self, index: i32, values: &[f64]) -> anyhow::Result<f64> {
        let idx = index_from_js(index, self.system.len())?;
        let equation = self.system.get(idx)?;
        Ok(equation.plug(&Vector::from_vec(values.to_vec()))?)
    }

    pub(crate) fn satisfies_values(&self, values: &[f64]) -> anyhow::Result<bool> {
        Ok(self.system.satisfies(&Vector::from_vec(values.to_vec()))?)
    }
}

#[wasm_bindgen]
impl WasmLinearSystem {
    #[wasm_bindgen(constructor)]
    pub fn new(coefficients: Vec<f64>, rhs: Vec<f64>) -> Result<WasmLinearSystem, JsValue> {
        console_error_panic_hook::set_once();

        let system = build_system(&coefficients, &rhs).map_err(js_error)?;
        Ok(WasmLinearSystem { system })
    }

    pub fn dimension(&self) -> usize {
        self.system.dim()
    }

    pub fn equation_count(&self) -> usize {
        self.system.len()
    }

    pub fn solve(&self) -> Result<Float64Array, JsValue> {
        let solution = self.solve_values(SolveMethod::Inverse).map_err(js_error)?;
        Ok(Float64Array::from(solution.as_slice()))
    }

    pub fn solve_by_elimination(&self) -> Result<Float64Array, JsValue> {
        let solution = self
            .solve_values(SolveMethod::Elimination)
            .map_err(js_error)?;
        Ok(Float64Array::from(solution.as_slice()))
    }

    pub fn satisfies(&self, values: &[f64]) -> Result<bool, JsValue> {
        self.satisfies_values(values).map_err(js_error)
    }

    pub fn plug(&self, index: i32, values: &[f64]) -> Result<f64, JsValue> {
        self.plug_value(index, values).map_err(js_error)
    }

    pub fn coefficient_matrix(&self) -> Result<JsValue, JsValue> {
        let matrix = self
            .system
            .coeff()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_value(&matrix).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn report(&self, method: &str, tolerance: f64) -> Result<JsValue, JsValue> {
        let settings = SolveSettings {
            method: parse_method(method).map_err(js_error)?,
            tolerance,
        };
        let report = solve_and_verify(&self.system, settings).map_err(js_error)?;
        to_value(&report).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
