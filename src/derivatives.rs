//! Derivatives of coefficient vectors and the shared table of base derivative sets.

use std::{
    collections::HashMap,
    iter,
    sync::{Arc, Mutex, PoisonError},
};

use log::debug;

use crate::{element::Element, error::LinalgError, vector::Vector};

/// Memo of successive derivatives of the all-ones polynomial `1 + x + x^2 + ... + x^(size-1)`.
///
/// For a given `size` the set holds `size` coefficient vectors: index 0 is the base
/// polynomial and index `k` its `k`-th derivative, of length `size - k`. Entry `j` of the
/// `k`-th vector is `(j + k)! / j!`, the weight of coefficient `c(j + k)` in the `k`-th
/// derivative evaluated at `x = 1`.
///
/// Sets are computed once per size and never evicted. The table can be shared between
/// interpolators through an [Arc].
#[derive(Debug, Default)]
pub struct DerivativeTable<T: Element> {
    sets: Mutex<HashMap<usize, Arc<[Vector<T>]>>>,
}

impl<T: Element> DerivativeTable<T> {
    pub fn new() -> Self {
        DerivativeTable {
            sets: Mutex::new(HashMap::new()),
        }
    }

    /// Derivative set of the all-ones polynomial with `size` coefficients.
    /// # Example
    /// ```
    /// use hermite_chain::DerivativeTable;
    ///
    /// let table = DerivativeTable::<f64>::new();
    /// let set = table.base_derivatives(4).unwrap();
    ///
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set[1].as_slice(), &[1.0, 2.0, 3.0]);
    /// assert_eq!(set[2].as_slice(), &[2.0, 6.0]);
    /// assert_eq!(set[3].as_slice(), &[6.0]);
    /// ```
    pub fn base_derivatives(&self, size: usize) -> Result<Arc<[Vector<T>]>, LinalgError> {
        let mut sets = self.sets.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = sets.get(&size) {
            return Ok(Arc::clone(set));
        }

        let mut base = Vector::zeros(size)?;
        base.reset(T::one());
        let set: Arc<[Vector<T>]> = all_derivatives(base).into();
        debug!("cached derivative set for size {}", size);

        sets.insert(size, Arc::clone(&set));
        Ok(set)
    }

    /// Number of sizes computed so far.
    pub fn len(&self) -> usize {
        self.sets.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, size: usize) -> bool {
        self.sets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&size)
    }
}

/// `c1 + 2*c2*x + ... + n*cn*x^(n-1)`, or `None` for a constant.
pub(crate) fn derivative<T: Element>(polynomial: &Vector<T>) -> Option<Vector<T>> {
    let coefficients = (1..polynomial.size())
        .map(|i| polynomial[i] * T::from_usize(i))
        .collect();
    Vector::from_vec(coefficients).ok()
}

/// `polynomial` followed by each of its derivatives down to the constant one.
pub(crate) fn all_derivatives<T: Element>(polynomial: Vector<T>) -> Vec<Vector<T>> {
    iter::successors(Some(polynomial), derivative).collect()
}
