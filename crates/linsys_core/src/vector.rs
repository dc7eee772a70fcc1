use crate::error::{check_index, LinalgError, Operand, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::slice::Iter;

/// A fixed-length vector of scalars.
///
/// Operations return new vectors; only [`Vector::set`] mutates in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(dim: usize) -> Self {
        Self::new(vec![T::zero(); dim])
    }

    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.dim())?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.dim())?;
        self.data[index] = value;
        Ok(())
    }

    /// Deep copy; equivalent to `clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.check_same_dim(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a + b)
            .collect())
    }

    pub fn scale(&self, factor: T) -> Vector<T> {
        self.iter().map(|&v| v * factor).collect()
    }

    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_same_dim(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Euclidean magnitude, `sqrt(v · v)`.
    pub fn mag(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }

    /// Column matrix (`dim x 1`) holding the entries in order.
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from_parts(self.dim(), 1, self.data.clone())
    }

    fn check_same_dim(&self, other: &Vector<T>) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(LinalgError::UnlikeDimensions {
                operand: Operand::Vector,
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{:.6}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ">")
    }
}
