//! Error types for graph construction and loading.

use std::io;

use thiserror::Error;

/// Errors arising from building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input ended before the node count was read.
    #[error("missing node count header")]
    MissingHeader,
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// An arc endpoint is not a node of the graph.
    #[error("arc {source_node} -> {target} outside [0, {node_count})")]
    ArcOutOfRange {
        /// Source endpoint as given.
        source_node: u64,
        /// Target endpoint as given.
        target: u64,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The graph has no nodes.
    #[error("graph has zero nodes")]
    EmptyGraph,
    /// The node count does not fit the 32-bit node id space.
    #[error("node count {value} exceeds u32::MAX")]
    NodeCountOverflow {
        /// The requested node count.
        value: u64,
    },
}
