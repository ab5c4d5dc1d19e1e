/// Successive derivatives of one chain endpoint: value, first derivative, second derivative...
///
/// Values can only be appended. The rank is the number of values collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationNode<V> {
    values: Vec<V>,
}

impl<V> InterpolationNode<V> {
    pub fn new() -> Self {
        InterpolationNode { values: Vec::new() }
    }

    /// Node holding `values` in derivative order.
    /// # Example
    /// ```
    /// use hermite_chain::InterpolationNode;
    ///
    /// // position 2.0, velocity -1.0
    /// let node = InterpolationNode::from_values(vec![2.0, -1.0]);
    /// assert_eq!(node.rank(), 2);
    /// assert_eq!(node.get(1), Some(&-1.0));
    /// ```
    pub fn from_values(values: Vec<V>) -> Self {
        InterpolationNode { values }
    }

    pub fn add_value(&mut self, value: V) {
        self.values.push(value);
    }

    pub fn rank(&self) -> usize {
        self.values.len()
    }

    /// Value of the `order`-th derivative.
    pub fn get(&self, order: usize) -> Option<&V> {
        self.values.get(order)
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<V> Default for InterpolationNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_only() {
        let mut node = InterpolationNode::new();
        assert_eq!(node.rank(), 0);
        assert_eq!(node.get(0), None);

        node.add_value(1.5);
        node.add_value(-2.0);

        assert_eq!(node.rank(), 2);
        assert_eq!(node.values(), &[1.5, -2.0]);
        assert_eq!(node.get(0), Some(&1.5));
        assert_eq!(node.get(2), None);
    }
}
