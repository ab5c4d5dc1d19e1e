use log::debug;

use crate::{element::Element, error::LinalgError, matrix::Matrix, vector::Vector};

/// Linear map `v -> M v` together with its inverse.
///
/// The inverse is computed once, at construction, because both directions are used
/// repeatedly. Solving `M c = y` for `c` is `transform_back(y)`.
#[derive(Debug, Clone)]
pub struct VectorTransformation<T: Element> {
    forward: Matrix<T>,
    backward: Matrix<T>,
}

impl<T: Element> VectorTransformation<T> {
    /// # Errors
    /// [LinalgError::NotSquare] for rectangular matrices and [LinalgError::Degenerate]
    /// when the determinant is exactly zero.
    pub fn new(forward: Matrix<T>) -> Result<Self, LinalgError> {
        if forward.determinant()? == T::zero() {
            return Err(LinalgError::Degenerate);
        }
        let backward = forward.inverse()?;
        debug!("built {0}x{0} transformation", forward.rows());

        Ok(VectorTransformation { forward, backward })
    }

    pub fn forward(&self) -> &Matrix<T> {
        &self.forward
    }

    pub fn backward(&self) -> &Matrix<T> {
        &self.backward
    }

    /// `M v`.
    pub fn transform_forward(&self, vector: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.apply(&self.forward, vector)
    }

    /// `M⁻¹ v`.
    pub fn transform_back(&self, vector: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.apply(&self.backward, vector)
    }

    fn apply(&self, matrix: &Matrix<T>, vector: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        if vector.size() != self.forward.rows() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.forward.rows(),
                got: vector.size(),
            });
        }
        matrix.try_mul(&vector.as_matrix_column())?.column(0)
    }
}
