use log::debug;

use crate::{
    condition::Condition,
    config::ChainConfig,
    error::InterpolationError,
    interpolation::{Interpolant, PolynomialInterpolator},
    node::InterpolationNode,
};

/// Ordered nodes joined by polynomial segments.
///
/// Every node carries `nodes_rank` derivative values. Each pair of consecutive nodes forms
/// one segment, fitted on the unit interval and sampled `segment_size` times. The last
/// point of a segment is not sampled because it is the first sample of the next one.
///
/// # Example
/// ```
/// use hermite_chain::{InterpolationChain, InterpolationNode};
///
/// let mut chain = InterpolationChain::new(1, 4).unwrap();
/// chain.add_node(InterpolationNode::from_values(vec![0.0])).unwrap();
/// chain.add_node(InterpolationNode::from_values(vec![1.0])).unwrap();
///
/// assert_eq!(chain.calc_values().unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolationChain<V: Interpolant> {
    nodes: Vec<InterpolationNode<V>>,
    config: ChainConfig,
    interpolator: PolynomialInterpolator<V::Scalar>,
}

impl<V: Interpolant> InterpolationChain<V> {
    pub fn new(nodes_rank: usize, segment_size: usize) -> Result<Self, InterpolationError> {
        Self::from_config(ChainConfig::new(nodes_rank, segment_size))
    }

    pub fn from_config(config: ChainConfig) -> Result<Self, InterpolationError> {
        Self::with_interpolator(config, PolynomialInterpolator::new())
    }

    /// Chain fitting its segments with `interpolator`, e.g. one sharing a derivative table
    /// with other chains.
    pub fn with_interpolator(
        config: ChainConfig,
        interpolator: PolynomialInterpolator<V::Scalar>,
    ) -> Result<Self, InterpolationError> {
        config.validate()?;
        Ok(InterpolationChain {
            nodes: Vec::new(),
            config,
            interpolator,
        })
    }

    pub fn nodes_rank(&self) -> usize {
        self.config.nodes_rank
    }

    pub fn segment_size(&self) -> usize {
        self.config.segment_size
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[InterpolationNode<V>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a complete node.
    /// # Errors
    /// [InterpolationError::RankMismatch] when the node does not hold exactly
    /// `nodes_rank` values.
    pub fn add_node(&mut self, node: InterpolationNode<V>) -> Result<(), InterpolationError> {
        if node.rank() != self.config.nodes_rank {
            return Err(InterpolationError::RankMismatch {
                expected: self.config.nodes_rank,
                got: node.rank(),
            });
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Appends a node without values, to be filled by [InterpolationChain::add_values_layer].
    pub fn add_blank_node(&mut self) {
        self.nodes.push(InterpolationNode::new());
    }

    /// Appends the next derivative order to every node, `layer[i]` going to node `i`.
    ///
    /// The chain is left untouched when an error is returned.
    /// # Example
    /// ```
    /// use hermite_chain::InterpolationChain;
    ///
    /// let mut chain = InterpolationChain::<f64>::new(2, 8).unwrap();
    /// for _ in 0..3 {
    ///     chain.add_blank_node();
    /// }
    /// chain.add_values_layer(&[0.0, 1.0, 0.0]).unwrap(); // values
    /// chain.add_values_layer(&[0.0, 0.0, 0.0]).unwrap(); // first derivatives
    ///
    /// assert!(chain.add_values_layer(&[1.0, 1.0, 1.0]).is_err());
    /// assert_eq!(chain.calc_values().unwrap().len(), 16);
    /// ```
    /// # Errors
    /// [InterpolationError::LayerLengthMismatch] when `layer` and the chain differ in
    /// length and [InterpolationError::RankExceeded] when a node is already complete.
    pub fn add_values_layer(&mut self, layer: &[V]) -> Result<(), InterpolationError> {
        if layer.len() != self.nodes.len() {
            return Err(InterpolationError::LayerLengthMismatch {
                expected: self.nodes.len(),
                got: layer.len(),
            });
        }
        if let Some((index, node)) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.rank() >= self.config.nodes_rank)
        {
            return Err(InterpolationError::RankExceeded {
                node: index,
                rank: node.rank(),
            });
        }

        for (node, value) in self.nodes.iter_mut().zip(layer) {
            node.add_value(value.clone());
        }
        Ok(())
    }

    /// One condition per pair of consecutive nodes, in chain order.
    pub fn conditions(&self) -> Result<Vec<Condition<V>>, InterpolationError> {
        if self.nodes.len() < 2 {
            return Err(InterpolationError::NotEnoughNodes {
                got: self.nodes.len(),
            });
        }
        if let Some((index, node)) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.rank() != self.config.nodes_rank)
        {
            return Err(InterpolationError::IncompleteNode {
                node: index,
                rank: node.rank(),
                expected: self.config.nodes_rank,
            });
        }

        let conditions = self
            .nodes
            .windows(2)
            .map(|pair| {
                let mut condition = Condition::new();
                for (zero_value, unit_value) in pair[0].values().iter().zip(pair[1].values()) {
                    condition.add_derivative_values(zero_value.clone(), unit_value.clone());
                }
                condition
            })
            .collect();
        Ok(conditions)
    }

    /// Samples of all segments, concatenated in node order: `(len() - 1) * segment_size`
    /// values.
    /// # Errors
    /// [InterpolationError::NotEnoughNodes] for fewer than 2 nodes,
    /// [InterpolationError::IncompleteNode] when a node lacks values, and any error of the
    /// segment fit.
    pub fn calc_values(&self) -> Result<Vec<V>, InterpolationError> {
        let conditions = self.conditions()?;
        debug!(
            "interpolating {} segments of rank {}",
            conditions.len(),
            self.config.nodes_rank
        );

        let mut values = Vec::with_capacity(conditions.len() * self.config.segment_size);
        for condition in &conditions {
            let segment = V::interpolate(&self.interpolator, condition, self.config.segment_size)?;
            values.extend(segment);
        }
        Ok(values)
    }
}
