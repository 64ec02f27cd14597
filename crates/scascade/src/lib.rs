//! scascade: simple epidemic cascade simulation over directed graphs.
//!
//! This is the facade crate that re-exports the public API of the
//! scascade sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use scascade::prelude::*;
//!
//! // 0 -> 1 -> 2 -> 3
//! let graph = AdjacencyGraph::from_arcs(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! let ic = InitialCondition::new(EpidemicId(1), [NodeId(0)], 2, StopCriterion::MaxDepth);
//!
//! let mut trace: Vec<TraceRecord> = Vec::new();
//! let mut epidemic = Epidemic::new(1.0, &graph, &ic, Some(&mut trace)).unwrap();
//! let termination = epidemic.run(&mut stream_rng(42, 0, 1)).unwrap();
//! assert_eq!(termination, Termination::DepthBound);
//! assert_eq!(epidemic.infected(), 3);
//! drop(epidemic);
//! assert_eq!(trace.len(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scascade-core` | ids, initial conditions, stop criteria, trace records |
//! | [`graph`] | `scascade-graph` | the `Network` trait, CSR graphs, the adjacency loader |
//! | [`engine`] | `scascade-engine` | the cascade algorithm and the parallel batch driver |
//! | [`io`] | `scascade-io` | initial-condition, bounds and trace file formats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`scascade-core`).
pub use scascade_core as types;

/// Graphs and the adjacency-list loader (`scascade-graph`).
pub use scascade_graph as graph;

/// Cascade engine and batch driver (`scascade-engine`).
///
/// [`engine::Epidemic`] runs one cascade; [`engine::BatchDriver`] runs
/// many over a shared graph on worker threads.
pub use scascade_engine as engine;

/// File formats (`scascade-io`).
pub use scascade_io as io;

/// Common imports.
///
/// ```rust
/// use scascade::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use scascade_core::{EpidemicId, InitialCondition, NodeId, StopCriterion, TraceRecord};

    // Graphs
    pub use scascade_graph::{AdjacencyGraph, GraphBuilder, LoadOptions, Network};

    // Engine
    pub use scascade_engine::trial::stream_rng;
    pub use scascade_engine::{
        BatchConfig, BatchDriver, BatchOutputs, BatchReport, Epidemic, EpidemicSummary,
        OutputThread, Termination, TraceSink,
    };

    // Errors
    pub use scascade_core::ConditionError;
    pub use scascade_engine::{BatchError, CascadeError, EpidemicError};
    pub use scascade_graph::GraphError;
    pub use scascade_io::InputError;
}
