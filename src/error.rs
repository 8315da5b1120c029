use thiserror::Error;

use crate::node::*;

/// Errors reported by the validating (`try_*`) constructors and entry points.
///
/// The algorithms themselves never fail: unreachable nodes, negative cycles and exhausted
/// augmenting-path searches are regular outcomes and are reported through return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("edge ({from},{to}) has a negative weight")]
    NegativeWeight { from: Node, to: Node },

    #[error("edge ({from},{to}) has a negative capacity")]
    NegativeCapacity { from: Node, to: Node },

    #[error("edge ({from},{to}) departs with a negative period")]
    NegativePeriod { from: Node, to: Node },
}

impl GraphError {
    /// Returns `Err(NodeOutOfRange)` if `u >= n`
    pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<(), GraphError> {
        if u < n {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node: u, n })
        }
    }
}
