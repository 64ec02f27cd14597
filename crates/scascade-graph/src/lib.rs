//! Immutable directed graphs for scascade simulations.
//!
//! This crate defines the [`Network`] trait, the read-only graph contract
//! consumed by the cascade engine, along with a compressed adjacency
//! backend and a loader for the text adjacency-list format.
//!
//! # Backends
//!
//! - [`AdjacencyGraph`]: offsets + targets storage, built with
//!   [`GraphBuilder`] or loaded with [`read_adjacency`]
//!
//! # File format
//!
//! ```text
//! # comments run to the end of the line
//! <n>
//! <u> <v>
//! ...
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{AdjacencyGraph, GraphBuilder};
pub use error::GraphError;
pub use loader::{load_adjacency_file, read_adjacency, LoadOptions};
pub use network::Network;
