//! JavaScript bindings for `linsys_core`: dense matrices and linear systems over `f64`.

mod matrix;
mod system;

pub use matrix::WasmMatrix;
pub use system::WasmLinearSystem;
