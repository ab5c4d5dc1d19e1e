use std::{
    cell::RefCell,
    ops::{Div, Index, IndexMut, Mul},
};

use log::trace;
use nalgebra::DMatrix;

use crate::{
    element::{cofactor_sign, Element},
    error::LinalgError,
    vector::Vector,
};

/// Dense matrix with exact cofactor-expansion algorithms.
///
/// The determinant and the cofactors of the first column are computed together and kept
/// until the next mutable element access. Reads through [Index] never touch the cache,
/// writes through [IndexMut] or [Matrix::set] always drop it.
///
/// # Example
/// ```
/// use hermite_chain::Matrix;
///
/// let mut matrix = Matrix::from_rows(vec![
///     vec![2.0, 1.0],
///     vec![7.0, 4.0],
/// ]).unwrap();
/// assert_eq!(matrix.determinant().unwrap(), 1.0);
///
/// matrix[(0, 0)] = 3.0;
/// assert_eq!(matrix.determinant().unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T: Element> {
    elements: Vec<T>,
    rows: usize,
    columns: usize,
    is_square: bool,
    cache: RefCell<Option<DeterminantCache<T>>>,
}

#[derive(Debug, Clone)]
struct DeterminantCache<T> {
    determinant: T,
    // empty for a 1x1 matrix
    first_column_cofactors: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Creates `rows` x `columns` matrix filled with zeros.
    /// # Errors
    /// [LinalgError::InvalidConstruction] when either dimension is zero.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self, LinalgError> {
        Self::from_vec(rows, columns, vec![T::zero(); rows * columns])
    }

    /// Creates matrix from row-major `elements`.
    /// # Errors
    /// [LinalgError::InvalidConstruction] when either dimension is zero and
    /// [LinalgError::DimensionMismatch] when `elements.len()` is not `rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, elements: Vec<T>) -> Result<Self, LinalgError> {
        if rows == 0 {
            return Err(LinalgError::InvalidConstruction(
                "rows count must be positive".to_string(),
            ));
        }
        if columns == 0 {
            return Err(LinalgError::InvalidConstruction(
                "columns count must be positive".to_string(),
            ));
        }
        if elements.len() != rows * columns {
            return Err(LinalgError::DimensionMismatch {
                expected: rows * columns,
                got: elements.len(),
            });
        }
        Ok(Self::from_parts(rows, columns, elements))
    }

    /// Creates matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let rows_count = rows.len();
        let columns_count = rows.first().map(|row| row.len()).unwrap_or(0);

        if let Some(row) = rows.iter().find(|row| row.len() != columns_count) {
            return Err(LinalgError::DimensionMismatch {
                expected: columns_count,
                got: row.len(),
            });
        }

        let elements = rows.into_iter().flatten().collect();
        Self::from_vec(rows_count, columns_count, elements)
    }

    /// Unit matrix of the given size.
    pub fn identity(size: usize) -> Result<Self, LinalgError> {
        let mut matrix = Self::zeros(size, size)?;
        for i in 0..size {
            matrix.elements[i * size + i] = T::one();
        }
        Ok(matrix)
    }

    pub(crate) fn from_parts(rows: usize, columns: usize, elements: Vec<T>) -> Self {
        Matrix {
            elements,
            rows,
            columns,
            is_square: rows == columns,
            cache: RefCell::new(None),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.is_square
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        if row < self.rows && column < self.columns {
            Some(self.elements[row * self.columns + column])
        } else {
            None
        }
    }

    /// Writes a single element and invalidates the cached determinant.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), LinalgError> {
        self.check_row(row)?;
        self.check_column(column)?;
        self[(row, column)] = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<Vector<T>, LinalgError> {
        self.check_row(row)?;
        let start = row * self.columns;
        Vector::from_vec(self.elements[start..start + self.columns].to_vec())
    }

    pub fn column(&self, column: usize) -> Result<Vector<T>, LinalgError> {
        self.check_column(column)?;
        Vector::from_vec((0..self.rows).map(|i| self[(i, column)]).collect())
    }

    /// Determinant by expansion along the first column.
    ///
    /// Computing it also stores every cofactor of the first column, so later calls to
    /// [Matrix::cofactor] with `column == 0`, [Matrix::adjugate] and [Matrix::inverse]
    /// reuse them.
    /// # Errors
    /// [LinalgError::NotSquare] for rectangular matrices.
    pub fn determinant(&self) -> Result<T, LinalgError> {
        self.check_square()?;
        Ok(self.with_cache(|cache| cache.determinant))
    }

    /// Determinant of the submatrix without `row` and `column`.
    pub fn minor(&self, row: usize, column: usize) -> Result<T, LinalgError> {
        self.check_minor_indices(row, column)?;
        Ok(minor_of(&self.elements, self.rows, row, column))
    }

    /// Signed minor, `(-1)^(row + column) * minor(row, column)`.
    pub fn cofactor(&self, row: usize, column: usize) -> Result<T, LinalgError> {
        self.check_minor_indices(row, column)?;
        if column == 0 {
            if let Some(cofactor) = self.cached_first_column().map(|cofactors| cofactors[row]) {
                return Ok(cofactor);
            }
        }
        Ok(cofactor_of(&self.elements, self.rows, row, column))
    }

    /// Matrix of all cofactors. Its transpose divided by the determinant is the inverse.
    pub fn adjugate(&self) -> Result<Self, LinalgError> {
        self.check_square()?;
        if self.rows < 2 {
            return Err(LinalgError::MinorOfScalar);
        }
        let first_column = self.cached_first_column();
        Ok(self.adjugate_with(first_column.as_deref()))
    }

    /// Inverse computed as `transpose(adjugate) / determinant`.
    /// # Errors
    /// [LinalgError::NotSquare] for rectangular matrices and [LinalgError::Degenerate]
    /// when the determinant is exactly zero. Nearly singular matrices are not detected.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.check_square()?;
        let (determinant, first_column) = self.with_cache(|cache| {
            (cache.determinant, cache.first_column_cofactors.clone())
        });

        if determinant == T::zero() {
            return Err(LinalgError::Degenerate);
        }
        if self.rows == 1 {
            return Ok(Self::from_parts(1, 1, vec![T::one() / determinant]));
        }

        Ok(&self.adjugate_with(Some(&first_column)).transpose() / determinant)
    }

    pub fn transpose(&self) -> Self {
        let elements = (0..self.columns)
            .flat_map(|j| (0..self.rows).map(move |i| self.elements[i * self.columns + j]))
            .collect();
        Self::from_parts(self.columns, self.rows, elements)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other)?;
        let elements = self.elements.iter().zip(&other.elements).map(|(a, b)| *a + *b).collect();
        Ok(Self::from_parts(self.rows, self.columns, elements))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other)?;
        let elements = self.elements.iter().zip(&other.elements).map(|(a, b)| *a - *b).collect();
        Ok(Self::from_parts(self.rows, self.columns, elements))
    }

    /// Matrix product `self * other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.columns != other.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.columns,
                got: other.rows,
            });
        }

        let mut elements = vec![T::zero(); self.rows * other.columns];
        for i in 0..self.rows {
            for j in 0..other.columns {
                elements[i * other.columns + j] = (0..self.columns)
                    .fold(T::zero(), |acc, k| acc + self[(i, k)] * other[(k, j)]);
            }
        }
        Ok(Self::from_parts(self.rows, other.columns, elements))
    }

    pub fn to_dmatrix(&self) -> DMatrix<T> {
        DMatrix::from_row_slice(self.rows, self.columns, &self.elements)
    }

    pub fn from_dmatrix(matrix: &DMatrix<T>) -> Result<Self, LinalgError> {
        let elements = (0..matrix.nrows())
            .flat_map(|i| (0..matrix.ncols()).map(move |j| matrix[(i, j)]))
            .collect();
        Self::from_vec(matrix.nrows(), matrix.ncols(), elements)
    }

    fn with_cache<R>(&self, read: impl FnOnce(&DeterminantCache<T>) -> R) -> R {
        let mut cache = self.cache.borrow_mut();
        let cache = cache.get_or_insert_with(|| {
            trace!("expanding {}x{} determinant", self.rows, self.columns);
            expand_first_column(&self.elements, self.rows)
        });
        read(cache)
    }

    fn cached_first_column(&self) -> Option<Vec<T>> {
        self.cache
            .borrow()
            .as_ref()
            .map(|cache| cache.first_column_cofactors.clone())
            .filter(|cofactors| !cofactors.is_empty())
    }

    fn adjugate_with(&self, first_column: Option<&[T]>) -> Self {
        let size = self.rows;
        let mut elements = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let cofactor = match first_column {
                    Some(cofactors) if j == 0 => cofactors[i],
                    _ => cofactor_of(&self.elements, size, i, j),
                };
                elements.push(cofactor);
            }
        }
        Self::from_parts(size, size, elements)
    }

    fn check_square(&self) -> Result<(), LinalgError> {
        if self.is_square {
            Ok(())
        } else {
            Err(LinalgError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    fn check_minor_indices(&self, row: usize, column: usize) -> Result<(), LinalgError> {
        self.check_square()?;
        if self.rows < 2 {
            return Err(LinalgError::MinorOfScalar);
        }
        self.check_row(row)?;
        self.check_column(column)
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row < self.rows {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                index: row,
                size: self.rows,
            })
        }
    }

    fn check_column(&self, column: usize) -> Result<(), LinalgError> {
        if column < self.columns {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                index: column,
                size: self.columns,
            })
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), LinalgError> {
        if self.rows != other.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                got: other.rows,
            });
        }
        if self.columns != other.columns {
            return Err(LinalgError::DimensionMismatch {
                expected: self.columns,
                got: other.columns,
            });
        }
        Ok(())
    }
}

// Square row-major helpers. Mutually recursive, O(n!).

fn expand_first_column<T: Element>(elements: &[T], size: usize) -> DeterminantCache<T> {
    if size == 1 {
        return DeterminantCache {
            determinant: elements[0],
            first_column_cofactors: Vec::new(),
        };
    }

    let first_column_cofactors: Vec<T> = (0..size)
        .map(|i| cofactor_of(elements, size, i, 0))
        .collect();
    let determinant = first_column_cofactors
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, cofactor)| acc + elements[i * size] * *cofactor);

    DeterminantCache {
        determinant,
        first_column_cofactors,
    }
}

fn determinant_of<T: Element>(elements: &[T], size: usize) -> T {
    if size == 1 {
        return elements[0];
    }
    (0..size).fold(T::zero(), |acc, i| {
        acc + elements[i * size] * cofactor_of(elements, size, i, 0)
    })
}

fn cofactor_of<T: Element>(elements: &[T], size: usize, row: usize, column: usize) -> T {
    minor_of(elements, size, row, column) * cofactor_sign(row, column)
}

fn minor_of<T: Element>(elements: &[T], size: usize, row: usize, column: usize) -> T {
    let submatrix: Vec<T> = (0..size)
        .filter(|i| *i != row)
        .flat_map(|i| {
            (0..size)
                .filter(move |j| *j != column)
                .map(move |j| elements[i * size + j])
        })
        .collect();
    determinant_of(&submatrix, size - 1)
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.elements == other.elements
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.elements[row * self.columns + column]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cache.get_mut().take();
        &mut self.elements[row * self.columns + column]
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        let elements = self.elements.iter().map(|a| *a * k).collect();
        Matrix::from_parts(self.rows, self.columns, elements)
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        &self * k
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, k: T) -> Matrix<T> {
        let elements = self.elements.iter().map(|a| *a / k).collect();
        Matrix::from_parts(self.rows, self.columns, elements)
    }
}

impl<T: Element> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, k: T) -> Matrix<T> {
        &self / k
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_matrix(rng: &mut StdRng, size: usize) -> Matrix<f64> {
        let elements = (0..size * size).map(|_| rng.gen_range(-5.0..5.0)).collect();
        Matrix::<f64>::from_vec(size, size, elements).unwrap()
    }

    fn sample_3x3() -> Matrix<f64> {
        Matrix::<f64>::from_rows(vec![
            vec![2.0, -1.0, 0.0],
            vec![1.0, 3.0, 4.0],
            vec![0.0, 5.0, -2.0],
        ])
        .unwrap()
    }

    #[test]
    fn invalid_construction() {
        assert!(matches!(
            Matrix::<f64>::zeros(0, 2),
            Err(LinalgError::InvalidConstruction(_))
        ));
        assert!(matches!(
            Matrix::<f64>::zeros(2, 0),
            Err(LinalgError::InvalidConstruction(_))
        ));
        assert!(Matrix::<f64>::from_rows(vec![]).is_err());
        assert_eq!(
            Matrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(LinalgError::DimensionMismatch { expected: 2, got: 1 })
        );
        assert_eq!(
            Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(LinalgError::DimensionMismatch { expected: 4, got: 3 })
        );
    }

    #[test]
    fn determinant_2x2() {
        let (a, b, c, d) = (3.0, -2.0, 1.5, 4.0);
        let matrix = Matrix::<f64>::from_rows(vec![vec![a, b], vec![c, d]]).unwrap();

        assert_eq!(matrix.determinant().unwrap(), a * d - b * c);
    }

    #[test]
    fn determinant_3x3() {
        // 2*(3*(-2) - 4*5) + 1*(1*(-2) - 0) = -52 - 2
        assert_approx_eq!(sample_3x3().determinant().unwrap(), -54.0, 1e-12);
    }

    #[test]
    fn determinant_1x1() {
        let matrix = Matrix::<f64>::from_vec(1, 1, vec![-4.5]).unwrap();
        assert_eq!(matrix.determinant().unwrap(), -4.5);
    }

    #[test]
    fn not_square() {
        let matrix = Matrix::<f64>::zeros(2, 3).unwrap();
        let expected = LinalgError::NotSquare { rows: 2, columns: 3 };

        assert_eq!(matrix.determinant(), Err(expected.clone()));
        assert_eq!(matrix.minor(0, 0), Err(expected.clone()));
        assert_eq!(matrix.cofactor(0, 0), Err(expected.clone()));
        assert_eq!(matrix.adjugate(), Err(expected.clone()));
        assert_eq!(matrix.inverse(), Err(expected));
    }

    #[test]
    fn minor_and_cofactor() {
        let matrix = sample_3x3();

        assert_approx_eq!(matrix.minor(0, 0).unwrap(), -26.0, 1e-12);
        assert_approx_eq!(matrix.minor(0, 1).unwrap(), -2.0, 1e-12);
        assert_approx_eq!(matrix.cofactor(0, 1).unwrap(), 2.0, 1e-12);
        assert_approx_eq!(matrix.minor(1, 2).unwrap(), 10.0, 1e-12);
        assert_approx_eq!(matrix.cofactor(1, 2).unwrap(), -10.0, 1e-12);
        assert_approx_eq!(matrix.cofactor(2, 2).unwrap(), 7.0, 1e-12);
    }

    #[test]
    fn minor_preconditions() {
        let scalar = Matrix::<f64>::from_vec(1, 1, vec![1.0]).unwrap();
        assert_eq!(scalar.minor(0, 0), Err(LinalgError::MinorOfScalar));
        assert_eq!(scalar.cofactor(0, 0), Err(LinalgError::MinorOfScalar));
        assert_eq!(scalar.adjugate(), Err(LinalgError::MinorOfScalar));

        let matrix = sample_3x3();
        assert_eq!(
            matrix.minor(3, 0),
            Err(LinalgError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(
            matrix.cofactor(0, 5),
            Err(LinalgError::IndexOutOfRange { index: 5, size: 3 })
        );
    }

    #[test]
    fn cached_cofactors_match_recomputed() {
        let matrix = sample_3x3();
        let fresh: Vec<f64> = (0..3).map(|i| matrix.cofactor(i, 0).unwrap()).collect();

        matrix.determinant().unwrap();
        assert!(matrix.cache.borrow().is_some());

        for i in 0..3 {
            assert_eq!(matrix.cofactor(i, 0).unwrap(), fresh[i]);
        }
    }

    #[test]
    fn determinant_is_cached_until_mutation() {
        let mut matrix = sample_3x3();
        assert!(matrix.cache.borrow().is_none());

        let first = matrix.determinant().unwrap();
        assert!(matrix.cache.borrow().is_some());
        assert_eq!(matrix.determinant().unwrap(), first);

        // same value still invalidates
        matrix[(0, 0)] = 2.0;
        assert!(matrix.cache.borrow().is_none());
        assert_eq!(matrix.determinant().unwrap(), first);

        matrix[(0, 0)] = 3.0;
        assert_approx_eq!(matrix.determinant().unwrap(), -80.0, 1e-12);

        matrix.set(2, 2, 0.0).unwrap();
        assert!(matrix.cache.borrow().is_none());
        assert_approx_eq!(matrix.determinant().unwrap(), -60.0, 1e-12);
    }

    #[test]
    fn reads_keep_cache() {
        let matrix = sample_3x3();
        matrix.determinant().unwrap();

        let _ = matrix[(1, 1)];
        let _ = matrix.get(2, 2);
        let _ = matrix.transpose();
        assert!(matrix.cache.borrow().is_some());
    }

    #[test]
    #[should_panic(expected = "index (2, 0) out of range for 2x3 matrix")]
    fn index_row_out_of_range() {
        let matrix = Matrix::<f64>::zeros(2, 3).unwrap();
        let _ = matrix[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "index (0, 3) out of range for 3x3 matrix")]
    fn index_mut_column_out_of_range() {
        let mut matrix = sample_3x3();
        matrix[(0, 3)] = 1.0;
    }

    #[test]
    fn set_out_of_range() {
        let mut matrix = sample_3x3();
        assert_eq!(
            matrix.set(1, 3, 0.0),
            Err(LinalgError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn adjugate() {
        let matrix = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let expected = Matrix::<f64>::from_rows(vec![vec![4.0, -3.0], vec![-2.0, 1.0]]).unwrap();

        assert_eq!(matrix.adjugate().unwrap(), expected);
        matrix.determinant().unwrap();
        assert_eq!(matrix.adjugate().unwrap(), expected);
    }

    #[test]
    fn identity() {
        let unit = Matrix::<f64>::identity(3).unwrap();

        assert_eq!(unit.determinant().unwrap(), 1.0);
        assert_eq!(unit.inverse().unwrap(), unit);
        assert!(Matrix::<f64>::identity(0).is_err());
    }

    #[test]
    fn inverse_2x2() {
        let matrix = Matrix::<f64>::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let inverse = matrix.inverse().unwrap();

        assert_approx_eq!(inverse[(0, 0)], 0.6, 1e-12);
        assert_approx_eq!(inverse[(0, 1)], -0.7, 1e-12);
        assert_approx_eq!(inverse[(1, 0)], -0.2, 1e-12);
        assert_approx_eq!(inverse[(1, 1)], 0.4, 1e-12);
    }

    #[test]
    fn inverse_1x1() {
        let matrix = Matrix::<f64>::from_vec(1, 1, vec![4.0]).unwrap();
        assert_eq!(matrix.inverse().unwrap()[(0, 0)], 0.25);
    }

    #[test]
    fn inverse_of_degenerate() {
        let matrix = Matrix::<f64>::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![0.0, 1.0, 1.0],
        ])
        .unwrap();

        assert_eq!(matrix.inverse(), Err(LinalgError::Degenerate));
        assert_eq!(
            Matrix::<f64>::from_vec(1, 1, vec![0.0]).unwrap().inverse(),
            Err(LinalgError::Degenerate)
        );
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let eps = 1e-9;
        let mut rng = StdRng::seed_from_u64(17);

        for size in 1..=5 {
            let matrix = random_matrix(&mut rng, size);
            let product = matrix.inverse().unwrap().try_mul(&matrix).unwrap();

            for i in 0..size {
                for j in 0..size {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_approx_eq!(product[(i, j)], expected, eps);
                }
            }
        }
    }

    #[test]
    fn transpose_keeps_determinant() {
        let mut rng = StdRng::seed_from_u64(3);

        for size in 1..=5 {
            let matrix = random_matrix(&mut rng, size);
            assert_approx_eq!(
                matrix.transpose().determinant().unwrap(),
                matrix.determinant().unwrap(),
                1e-9
            );
        }
    }

    #[test]
    fn agrees_with_nalgebra() {
        let mut rng = StdRng::seed_from_u64(11);

        for size in 2..=5 {
            let matrix = random_matrix(&mut rng, size);
            let reference = matrix.to_dmatrix();

            assert_approx_eq!(matrix.determinant().unwrap(), reference.determinant(), 1e-9);

            let inverse = matrix.inverse().unwrap();
            let reference_inverse = reference.try_inverse().unwrap();
            for i in 0..size {
                for j in 0..size {
                    assert_approx_eq!(inverse[(i, j)], reference_inverse[(i, j)], 1e-9);
                }
            }
        }
    }

    #[test]
    fn dmatrix_conversion() {
        let matrix = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let converted = matrix.to_dmatrix();

        assert_eq!(converted[(0, 2)], 3.0);
        assert_eq!(converted[(1, 0)], 4.0);
        assert_eq!(Matrix::from_dmatrix(&converted).unwrap(), matrix);
        assert!(Matrix::from_dmatrix(&DMatrix::<f64>::zeros(0, 3)).is_err());
    }

    #[test]
    fn transpose_rectangular() {
        let matrix = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let transposed = matrix.transpose();

        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed.columns(), 2);
        assert_eq!(transposed[(2, 1)], 6.0);
        assert_eq!(transposed[(0, 1)], 4.0);
    }

    #[test]
    fn arithmetic() {
        let a = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::<f64>::from_rows(vec![vec![0.5, -1.0], vec![2.0, 0.0]]).unwrap();

        assert_eq!(
            a.try_add(&b).unwrap(),
            Matrix::<f64>::from_rows(vec![vec![1.5, 1.0], vec![5.0, 4.0]]).unwrap()
        );
        assert_eq!(
            a.try_sub(&b).unwrap(),
            Matrix::<f64>::from_rows(vec![vec![0.5, 3.0], vec![1.0, 4.0]]).unwrap()
        );
        assert_eq!(
            a.try_mul(&b).unwrap(),
            Matrix::<f64>::from_rows(vec![vec![4.5, -1.0], vec![9.5, -3.0]]).unwrap()
        );
        assert_eq!(
            &a * 2.0,
            Matrix::<f64>::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]]).unwrap()
        );
        assert_eq!(
            a / 2.0,
            Matrix::<f64>::from_rows(vec![vec![0.5, 1.0], vec![1.5, 2.0]]).unwrap()
        );
    }

    #[test]
    fn arithmetic_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2).unwrap();
        let b = Matrix::<f64>::zeros(3, 2).unwrap();

        assert!(a.try_add(&b).is_err());
        assert!(a.try_sub(&b).is_err());
        assert_eq!(
            a.try_mul(&b),
            Err(LinalgError::DimensionMismatch { expected: 2, got: 3 })
        );
        assert!(b.try_mul(&a).is_ok());
    }

    #[test]
    fn equality() {
        let a = Matrix::<f64>::zeros(2, 3).unwrap();
        let b = Matrix::<f64>::zeros(3, 2).unwrap();
        let mut c = a.clone();

        assert_ne!(a, b);
        assert_eq!(a, c);
        c[(1, 2)] = 1e-300;
        assert_ne!(a, c);
    }

    #[test]
    fn rows_and_columns() {
        let matrix = sample_3x3();

        assert_eq!(matrix.row(1).unwrap().as_slice(), &[1.0, 3.0, 4.0]);
        assert_eq!(matrix.column(1).unwrap().as_slice(), &[-1.0, 3.0, 5.0]);
        assert!(matrix.row(3).is_err());
        assert!(matrix.column(3).is_err());
    }

    #[test]
    fn single_precision() {
        let matrix = Matrix::<f32>::from_rows(vec![vec![2.0_f32, 1.0], vec![1.0, 1.0]]).unwrap();
        let inverse = matrix.inverse().unwrap();

        assert_eq!(matrix.determinant().unwrap(), 1.0_f32);
        assert_eq!(
            inverse,
            Matrix::<f32>::from_rows(vec![vec![1.0, -1.0], vec![-1.0, 2.0]]).unwrap()
        );
    }
}
