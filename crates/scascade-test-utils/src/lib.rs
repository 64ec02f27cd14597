//! Test fixtures for scascade development.
//!
//! Provides small named graphs ([`line_graph`], [`star_graph`],
//! [`triangle_graph`], [`isolated_nodes`]), a seeded [`random_graph`]
//! generator, and a breadth-first [`forward_distances`] oracle used to
//! check cascades run with `p = 1`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    condition, forward_distances, ids, isolated_nodes, line_graph, random_graph,
    simple_random_graph, star_graph, triangle_graph,
};
