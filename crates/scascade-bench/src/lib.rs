//! Benchmark profiles for the scascade cascade simulator.
//!
//! - [`reference_graph`]: 10K nodes, mean out-degree 5
//! - [`stress_graph`]: 100K nodes, mean out-degree 5
//! - [`reference_conditions`]: deterministic single-seed epidemics
//! - [`adjacency_text`]: a graph rendered in the loader's text format

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scascade_core::{EpidemicId, InitialCondition, NodeId, StopCriterion};
use scascade_graph::{AdjacencyGraph, GraphBuilder, Network};

/// Uniform random directed graph with `n` nodes and `n * degree` arcs.
pub fn random_graph(n: usize, degree: usize, seed: u64) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(n).unwrap();
    builder.reserve(n * degree);
    for _ in 0..n * degree {
        let u = rng.random_range(0..n as u32);
        let v = rng.random_range(0..n as u32);
        builder.add_arc(u, v).unwrap();
    }
    builder.build()
}

/// 10K nodes, 50K arcs.
pub fn reference_graph(seed: u64) -> AdjacencyGraph {
    random_graph(10_000, 5, seed)
}

/// 100K nodes, 500K arcs.
pub fn stress_graph(seed: u64) -> AdjacencyGraph {
    random_graph(100_000, 5, seed)
}

/// `count` single-seed epidemics with seeds spread over `[0, n)`.
pub fn reference_conditions(
    count: usize,
    n: usize,
    bound: u32,
    stop: StopCriterion,
) -> Vec<InitialCondition> {
    (0..count)
        .map(|i| {
            let seed = NodeId(((i * 7919) % n) as u32);
            InitialCondition::new(EpidemicId(i as i64), [seed], bound, stop)
        })
        .collect()
}

/// Render `g` in the adjacency-list text format.
pub fn adjacency_text(g: &dyn Network) -> String {
    let mut out = String::with_capacity(g.arc_count() * 12);
    let _ = writeln!(out, "{}", g.node_count());
    for u in 0..g.node_count() as u32 {
        for v in g.out_neighbours(NodeId(u)) {
            let _ = writeln!(out, "{u} {v}");
        }
    }
    out
}
