use std::sync::Arc;

use crate::{
    condition::Condition,
    derivatives::DerivativeTable,
    element::Element,
    error::{InterpolationError, LinalgError},
    matrix::Matrix,
    polynomial::Polynomial,
    transformation::VectorTransformation,
    vector::Vector,
};

/// Fits polynomials to [Condition]s on the unit interval and samples them.
///
/// A condition of rank `r` fixes the value and the first `r - 1` derivatives at both
/// `x = 0` and `x = 1`, which determines exactly one polynomial of degree `2r - 1`.
/// The interpolator owns the [DerivativeTable] its linear systems are built from.
#[derive(Debug, Clone)]
pub struct PolynomialInterpolator<T: Element> {
    table: Arc<DerivativeTable<T>>,
}

impl<T: Element> PolynomialInterpolator<T> {
    pub fn new() -> Self {
        Self::with_table(Arc::new(DerivativeTable::new()))
    }

    /// Interpolator reusing an existing derivative table.
    pub fn with_table(table: Arc<DerivativeTable<T>>) -> Self {
        PolynomialInterpolator { table }
    }

    pub fn table(&self) -> &Arc<DerivativeTable<T>> {
        &self.table
    }

    /// Solves for the coefficients of the polynomial satisfying `condition`.
    ///
    /// The system has two rows per derivative order `k`. The first fixes `c(k)` to the
    /// zero-end value. The second fixes the `k`-th derivative at `x = 1`, weighted by the
    /// `k`-th entry of the derivative table, to the unit-end value.
    ///
    /// For `k < 2` the zero-end value is the `k`-th derivative at `x = 0`. For higher
    /// orders it is the Taylor coefficient, so the derivative there is `k!` times it.
    /// # Errors
    /// [InterpolationError::EmptyCondition] for a rank 0 condition.
    pub fn create_polynomial(&self, condition: &Condition<T>) -> Result<Polynomial<T>, InterpolationError> {
        let rank = condition.rank();
        if rank == 0 {
            return Err(InterpolationError::EmptyCondition);
        }

        let size = rank * 2;
        let derivatives = self.table.base_derivatives(size)?;
        let mut matrix = Matrix::zeros(size, size)?;
        let mut targets = Vector::zeros(size)?;

        for (order, (zero_value, unit_value)) in condition.pairs().enumerate() {
            let row = order * 2;

            matrix[(row, order)] = T::one();
            targets[row] = *zero_value;

            for (j, weight) in derivatives[order].iter().enumerate() {
                matrix[(row + 1, order + j)] = *weight;
            }
            targets[row + 1] = *unit_value;
        }

        let transformation = VectorTransformation::new(matrix)?;
        let coefficients = transformation.transform_back(&targets)?;
        Ok(Polynomial::new(coefficients.into_vec()))
    }

    /// Samples the fitted polynomial at `i / steps_count` for `i` in `0..steps_count`.
    /// # Example
    /// ```
    /// use hermite_chain::{Condition, PolynomialInterpolator};
    ///
    /// let interpolator = PolynomialInterpolator::<f64>::new();
    /// let condition = Condition::with_values(0.0, 1.0);
    ///
    /// let values = interpolator.interpolate(&condition, 4).unwrap();
    /// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    /// ```
    pub fn interpolate(&self, condition: &Condition<T>, steps_count: usize) -> Result<Vec<T>, InterpolationError> {
        Ok(self.create_polynomial(condition)?.sample(steps_count))
    }

    /// Interpolates every coordinate independently and regroups the samples per step.
    /// # Errors
    /// [InterpolationError::EmptyCondition] for a rank 0 condition and
    /// [LinalgError::DimensionMismatch] when the vectors differ in size.
    pub fn interpolate_vectors(
        &self,
        condition: &Condition<Vector<T>>,
        steps_count: usize,
    ) -> Result<Vec<Vector<T>>, InterpolationError> {
        let size = condition
            .zero_value(0)
            .ok_or(InterpolationError::EmptyCondition)?
            .size();

        let mut values = condition.zero_values().iter().chain(condition.unit_values());
        if let Some(vector) = values.find(|vector| vector.size() != size) {
            return Err(LinalgError::DimensionMismatch {
                expected: size,
                got: vector.size(),
            }
            .into());
        }

        let coordinates = (0..size)
            .map(|i| {
                let mut coordinate_condition = Condition::new();
                for (zero_value, unit_value) in condition.pairs() {
                    coordinate_condition.add_derivative_values(zero_value[i], unit_value[i]);
                }
                self.interpolate(&coordinate_condition, steps_count)
            })
            .collect::<Result<Vec<Vec<T>>, _>>()?;

        (0..steps_count)
            .map(|step| {
                let elements = coordinates.iter().map(|coordinate| coordinate[step]).collect();
                Vector::from_vec(elements).map_err(InterpolationError::from)
            })
            .collect()
    }
}

impl<T: Element> Default for PolynomialInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Value type an [InterpolationChain](crate::InterpolationChain) can carry.
///
/// Scalars are fitted directly, [Vector]s coordinate by coordinate.
pub trait Interpolant: Clone {
    type Scalar: Element;

    fn interpolate(
        interpolator: &PolynomialInterpolator<Self::Scalar>,
        condition: &Condition<Self>,
        steps_count: usize,
    ) -> Result<Vec<Self>, InterpolationError>;
}

macro_rules! impl_scalar_interpolant {
    ($($t:ty),*) => {
        $(
            impl Interpolant for $t {
                type Scalar = $t;

                fn interpolate(
                    interpolator: &PolynomialInterpolator<$t>,
                    condition: &Condition<$t>,
                    steps_count: usize,
                ) -> Result<Vec<$t>, InterpolationError> {
                    interpolator.interpolate(condition, steps_count)
                }
            }
        )*
    };
}

impl_scalar_interpolant!(f32, f64);

impl<T: Element> Interpolant for Vector<T> {
    type Scalar = T;

    fn interpolate(
        interpolator: &PolynomialInterpolator<T>,
        condition: &Condition<Vector<T>>,
        steps_count: usize,
    ) -> Result<Vec<Vector<T>>, InterpolationError> {
        interpolator.interpolate_vectors(condition, steps_count)
    }
}
