//! Error types for the cascade engine.
//!
//! Split by subsystem: the active frontier, epidemic construction, the
//! run loop itself, and the output writer threads. Batch-level errors
//! live next to the driver in [`crate::batched`].

use std::io;

use scascade_core::{ConditionError, NodeId};
use thiserror::Error;

/// Errors from the bounded active frontier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// A frontier must hold at least one node.
    #[error("frontier capacity must be at least 1")]
    ZeroCapacity,
    /// Push on a full frontier.
    #[error("frontier full at capacity {capacity}")]
    Full {
        /// The frontier's capacity.
        capacity: usize,
    },
}

/// Errors constructing an [`Epidemic`](crate::Epidemic).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EpidemicError {
    /// The infection probability is not in `(0, 1]`.
    #[error("infection probability must be in (0, 1], got {value}")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
    /// The initial condition does not fit the graph.
    #[error(transparent)]
    Condition(#[from] ConditionError),
    /// Seeding overflowed the frontier.
    #[error("seeding failed: {0}")]
    Frontier(#[from] FrontierError),
}

/// Invariant violations detected while an epidemic runs.
///
/// These indicate a bug (or a graph that breaks the
/// [`Network`](scascade_graph::Network) contract) and are fatal for the
/// whole batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// A newly infected node could not be enqueued.
    #[error("enqueue of node {node} failed: {source}")]
    Enqueue {
        /// The node being enqueued.
        node: NodeId,
        /// The frontier failure.
        source: FrontierError,
    },
    /// A node was dequeued without an infection time.
    #[error("node {node} dequeued without an infection time")]
    UninfectedInFrontier {
        /// The offending node.
        node: NodeId,
    },
    /// The graph returned a neighbour outside `[0, n)`.
    #[error("arc {provider} -> {client} leaves the graph of {node_count} nodes")]
    NeighbourOutOfRange {
        /// The node being processed.
        provider: NodeId,
        /// The out-of-range neighbour.
        client: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The step counter would overflow.
    #[error("infection step overflow at node {node}")]
    StepOverflow {
        /// The node whose successors would overflow.
        node: NodeId,
    },
}

/// Errors from an output writer thread.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The writer thread could not be spawned.
    #[error("could not spawn output thread '{name}': {source}")]
    Spawn {
        /// Thread name.
        name: String,
        /// The spawn failure.
        source: io::Error,
    },
    /// The writer thread panicked.
    #[error("output thread '{name}' panicked")]
    Panicked {
        /// Thread name.
        name: String,
    },
}
