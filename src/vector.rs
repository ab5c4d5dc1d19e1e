use std::ops::{Div, Index, IndexMut, Mul};

use nalgebra::DVector;

use crate::{element::Element, error::LinalgError, matrix::Matrix};

/// Dense vector of at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Element> {
    elements: Vec<T>,
}

impl<T: Element> Vector<T> {
    /// Creates vector of `size` zeros.
    /// # Errors
    /// [LinalgError::InvalidConstruction] when `size` is zero.
    pub fn zeros(size: usize) -> Result<Self, LinalgError> {
        Self::from_vec(vec![T::zero(); size])
    }

    /// Takes ownership of `elements` as the vector coordinates.
    /// # Example
    /// ```
    /// use hermite_chain::Vector;
    ///
    /// let vector = Vector::from_vec(vec![3.0, 4.0]).unwrap();
    /// assert_eq!(vector.modulus(), 5.0);
    /// assert!(Vector::<f64>::from_vec(vec![]).is_err());
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Result<Self, LinalgError> {
        if elements.is_empty() {
            return Err(LinalgError::InvalidConstruction(
                "vector must have at least one element".to_string(),
            ));
        }
        Ok(Vector { elements })
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.elements.get(index).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_size(other)?;
        let elements = self.iter().zip(other.iter()).map(|(a, b)| *a + *b).collect();
        Ok(Vector { elements })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_size(other)?;
        let elements = self.iter().zip(other.iter()).map(|(a, b)| *a - *b).collect();
        Ok(Vector { elements })
    }

    /// Euclidean norm.
    pub fn modulus(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| acc + *x * *x).sqrt()
    }

    /// Sets every element to `value`.
    pub fn reset(&mut self, value: T) {
        self.elements.fill(value);
    }

    /// Copy of the vector without the element at `index`.
    pub fn with_excluded(&self, index: usize) -> Result<Self, LinalgError> {
        if index >= self.size() {
            return Err(LinalgError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        let elements = self
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, x)| *x)
            .collect();
        Self::from_vec(elements)
    }

    /// 1 x N matrix.
    pub fn as_matrix_row(&self) -> Matrix<T> {
        Matrix::from_parts(1, self.size(), self.elements.clone())
    }

    /// N x 1 matrix.
    pub fn as_matrix_column(&self) -> Matrix<T> {
        Matrix::from_parts(self.size(), 1, self.elements.clone())
    }

    /// Scalar product computed as `row(self) * column(other)`.
    pub fn dot(&self, other: &Self) -> Result<T, LinalgError> {
        let product = self.as_matrix_row().try_mul(&other.as_matrix_column())?;
        Ok(product[(0, 0)])
    }

    /// Generalized cross product of `n - 1` vectors of dimension `n`.
    ///
    /// Builds the `n x n` matrix whose first row is all ones and whose other rows are
    /// the operands, and returns the cofactors of its first row. The result is orthogonal
    /// to every operand.
    /// # Example
    /// ```
    /// use hermite_chain::Vector;
    ///
    /// let x = Vector::from_vec(vec![1.0, 0.0, 0.0]).unwrap();
    /// let y = Vector::from_vec(vec![0.0, 1.0, 0.0]).unwrap();
    /// let z = Vector::orthogonal(&[x, y]).unwrap();
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    /// # Errors
    /// [LinalgError::InvalidOperation] for fewer than 2 operands, operands of different
    /// dimensions or a dimension other than `operands.len() + 1`.
    pub fn orthogonal(operands: &[Self]) -> Result<Self, LinalgError> {
        if operands.len() < 2 {
            return Err(LinalgError::InvalidOperation(format!(
                "orthogonal vector needs at least 2 operands, got {}",
                operands.len()
            )));
        }
        let size = operands[0].size();
        if size != operands.len() + 1 {
            return Err(LinalgError::InvalidOperation(format!(
                "{} operands must have dimension {}, got {}",
                operands.len(),
                operands.len() + 1,
                size
            )));
        }
        if operands.iter().any(|operand| operand.size() != size) {
            return Err(LinalgError::InvalidOperation(
                "operands have different dimensions".to_string(),
            ));
        }

        let elements = (0..size)
            .flat_map(|i| {
                (0..size).map(move |j| if i == 0 { T::one() } else { operands[i - 1][j] })
            })
            .collect();
        let matrix = Matrix::from_vec(size, size, elements)?;

        let cofactors = (0..size)
            .map(|j| matrix.cofactor(0, j))
            .collect::<Result<Vec<T>, _>>()?;
        Self::from_vec(cofactors)
    }

    pub fn to_dvector(&self) -> DVector<T> {
        DVector::from_column_slice(&self.elements)
    }

    pub fn from_dvector(vector: &DVector<T>) -> Result<Self, LinalgError> {
        Self::from_vec(vector.iter().copied().collect())
    }

    fn check_same_size(&self, other: &Self) -> Result<(), LinalgError> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                expected: self.size(),
                got: other.size(),
            })
        }
    }
}

impl<T: Element> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: Element> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        Vector {
            elements: self.iter().map(|x| *x * k).collect(),
        }
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        &self * k
    }
}

impl<T: Element> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, k: T) -> Vector<T> {
        Vector {
            elements: self.iter().map(|x| *x / k).collect(),
        }
    }
}

impl<T: Element> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, k: T) -> Vector<T> {
        &self / k
    }
}
