//! Chains of polynomial segments matching prescribed derivatives at every node.
//! Each segment between two consecutive nodes is the unique polynomial of degree
//! `2 * rank - 1` agreeing with the value and the first `rank - 1` derivatives of both nodes.
//! Nodes may hold plain scalars or [Vector]s, the latter interpolated coordinate by coordinate.
//!
//! The small dense linear algebra the segments are solved with ([Matrix], [Vector],
//! [VectorTransformation]) is exposed as well.
//!
//! # Example
//! ```
//! use hermite_chain::{InterpolationChain, InterpolationNode};
//! use assert_approx_eq::assert_approx_eq;
//!
//! // values and first derivatives
//! let mut chain = InterpolationChain::<f64>::new(2, 4).unwrap();
//! chain.add_node(InterpolationNode::from_values(vec![0.0, 0.0])).unwrap();
//! chain.add_node(InterpolationNode::from_values(vec![1.0, 0.0])).unwrap();
//! chain.add_node(InterpolationNode::from_values(vec![0.0, 0.0])).unwrap();
//!
//! let values = chain.calc_values().unwrap();
//! assert_eq!(values.len(), 8);
//! assert_approx_eq!(0.5, values[2], 1e-9);
//! assert_approx_eq!(1.0, values[4], 1e-9);
//! ```

mod chain;
mod condition;
mod config;
mod derivatives;
mod element;
mod error;
mod interpolation;
mod matrix;
mod node;
mod polynomial;
mod transformation;
mod vector;

pub use chain::InterpolationChain;
pub use condition::Condition;
pub use config::ChainConfig;
pub use derivatives::DerivativeTable;
pub use element::Element;
pub use error::{InterpolationError, LinalgError};
pub use interpolation::{Interpolant, PolynomialInterpolator};
pub use matrix::Matrix;
pub use node::InterpolationNode;
pub use polynomial::Polynomial;
pub use transformation::VectorTransformation;
pub use vector::Vector;
