//! Chain configuration.

use crate::error::InterpolationError;

/// Shape of an [InterpolationChain](crate::InterpolationChain).
///
/// # Example
/// ```
/// use hermite_chain::ChainConfig;
///
/// // values and first derivatives, 16 samples per segment
/// let config = ChainConfig::default();
/// assert_eq!(config.nodes_rank, 2);
/// assert!(config.validate().is_ok());
///
/// let invalid = ChainConfig { nodes_rank: 0, segment_size: 8 };
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainConfig {
    /// Number of derivative values per node, the value itself included.
    ///
    /// Segments are fitted with polynomials of degree `2 * nodes_rank - 1`.
    pub nodes_rank: usize,

    /// Samples produced for every segment between two consecutive nodes.
    pub segment_size: usize,
}

impl Default for ChainConfig {
    /// Cubic segments (value and first derivative) sampled 16 times.
    fn default() -> Self {
        Self {
            nodes_rank: 2,
            segment_size: 16,
        }
    }
}

impl ChainConfig {
    pub fn new(nodes_rank: usize, segment_size: usize) -> Self {
        Self {
            nodes_rank,
            segment_size,
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.nodes_rank == 0 {
            return Err(InterpolationError::InvalidConfig(
                "nodes_rank must be at least 1".to_string(),
            ));
        }
        if self.segment_size == 0 {
            return Err(InterpolationError::InvalidConfig(
                "segment_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
