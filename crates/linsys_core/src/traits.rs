use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// A trait for types that can be used as entries of vectors and matrices.
/// Must support basic arithmetic, debug and display printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + Display + 'static {}

impl<T: Float + FromPrimitive + Debug + Display + 'static> Scalar for T {}

/// Returns `(-1)^k` as a scalar.
pub(crate) fn alternating_sign<T: Scalar>(k: usize) -> T {
    if k % 2 == 0 {
        T::one()
    } else {
        -T::one()
    }
}
