//! Error types for initial-condition validation.

use thiserror::Error;

use crate::id::{EpidemicId, NodeId};

/// An initial condition that cannot start an epidemic on a given graph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The seed set is empty.
    #[error("epidemic {id}: seed set is empty")]
    NoSeeds {
        /// The offending epidemic.
        id: EpidemicId,
    },
    /// A seed is not a node of the graph.
    #[error("epidemic {id}: seed {seed} outside [0, {node_count})")]
    SeedOutOfRange {
        /// The offending epidemic.
        id: EpidemicId,
        /// The out-of-range seed.
        seed: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The same node appears twice in the seed set.
    #[error("epidemic {id}: seed {seed} listed more than once")]
    DuplicateSeed {
        /// The offending epidemic.
        id: EpidemicId,
        /// The repeated seed.
        seed: NodeId,
    },
    /// The bound is zero; bounds must be positive.
    #[error("epidemic {id}: bound must be positive")]
    ZeroBound {
        /// The offending epidemic.
        id: EpidemicId,
    },
}
