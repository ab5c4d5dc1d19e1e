use crate::node::InterpolationNode;

/// Derivative values at both ends of one segment, `x = 0` and `x = 1`.
///
/// Position `i` of either end is the `i`-th derivative (0 is the value itself). At the zero
/// end, positions 2 and above are taken as the polynomial coefficients of those orders.
/// Both ends always have the same rank because values are only ever added in pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition<V> {
    zero_node: InterpolationNode<V>,
    unit_node: InterpolationNode<V>,
}

impl<V: Clone> Condition<V> {
    pub fn new() -> Self {
        Condition {
            zero_node: InterpolationNode::new(),
            unit_node: InterpolationNode::new(),
        }
    }

    /// Rank 1 condition: plain values at both ends.
    pub fn with_values(zero_value: V, unit_value: V) -> Self {
        let mut condition = Self::new();
        condition.add_derivative_values(zero_value, unit_value);
        condition
    }

    /// Appends the next derivative order to both ends.
    pub fn add_derivative_values(&mut self, zero_value: V, unit_value: V) {
        self.zero_node.add_value(zero_value);
        self.unit_node.add_value(unit_value);
    }

    pub fn rank(&self) -> usize {
        self.zero_node.rank()
    }

    pub fn zero_value(&self, order: usize) -> Option<&V> {
        self.zero_node.get(order)
    }

    pub fn unit_value(&self, order: usize) -> Option<&V> {
        self.unit_node.get(order)
    }

    pub fn zero_values(&self) -> &[V] {
        self.zero_node.values()
    }

    pub fn unit_values(&self) -> &[V] {
        self.unit_node.values()
    }

    /// Zero-end values followed by unit-end values.
    pub fn all_values(&self) -> Vec<V> {
        self.zero_values()
            .iter()
            .chain(self.unit_values())
            .cloned()
            .collect()
    }

    /// `(zero value, unit value)` per derivative order.
    pub fn pairs(&self) -> impl Iterator<Item = (&V, &V)> {
        self.zero_values().iter().zip(self.unit_values())
    }
}

impl<V: Clone> Default for Condition<V> {
    fn default() -> Self {
        Self::new()
    }
}
