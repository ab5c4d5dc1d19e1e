use crate::element::Element;

/// `y = c0 + c1*x + c2*x^2 + ... + cn*x^n`
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Element> {
    coefficients: Vec<T>,
    size: usize,
}

impl<T: Element> Polynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Self {
        let size = coefficients.len();
        Polynomial { coefficients, size }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn evaluate(&self, x: T) -> T {
        let mut result = T::zero();
        for i in 0..self.size {
            result = result + x.powi(i as i32) * self.coefficients[i];
        }
        result
    }

    /// `y' = c1 + 2*c2*x + ... + n*cn*x^(n-1)`. The derivative of a constant has no coefficients.
    pub fn derivative(&self) -> Self {
        let coefficients = (1..self.size)
            .map(|i| self.coefficients[i] * T::from_usize(i))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Value of the `order`-th derivative at `x`.
    pub fn evaluate_derivative(&self, order: usize, x: T) -> T {
        (0..order)
            .fold(self.clone(), |polynomial, _| polynomial.derivative())
            .evaluate(x)
    }

    /// Values at `i / steps_count` for `i` in `0..steps_count`. The end of the unit
    /// interval is not sampled.
    pub fn sample(&self, steps_count: usize) -> Vec<T> {
        let step = T::one() / T::from_usize(steps_count);
        (0..steps_count)
            .map(|i| self.evaluate(step * T::from_usize(i)))
            .collect()
    }
}
