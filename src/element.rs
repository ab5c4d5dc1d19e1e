use std::fmt::Debug;

use nalgebra::Scalar;
use num_traits::Float;

/// Floating-point scalar every matrix, vector and interpolation routine is generic over.
///
/// Implemented for `f32` and `f64`. Comparisons against zero in this crate are exact,
/// so both precisions keep the same observable behaviour.
pub trait Element: Float + Scalar + Debug + Send + Sync {
    /// Converts an index or a count into the element type.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn from_usize(n: usize) -> Self {
                    n as $t
                }
            }
        )*
    };
}

impl_element!(f32, f64);

/// `+1` when `i + j` is even, `-1` otherwise.
pub(crate) fn cofactor_sign<T: Element>(i: usize, j: usize) -> T {
    if (i + j) % 2 == 0 {
        T::one()
    } else {
        -T::one()
    }
}
