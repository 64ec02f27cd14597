//! Reusable graph fixtures.
//!
//! - [`line_graph`]: `0 → 1 → … → n-1`.
//! - [`star_graph`]: centre `0` with arcs to `1..=leaves`.
//! - [`triangle_graph`]: `0 → 1`, `0 → 2`, `1 → 2` (a late arc into an infected node).
//! - [`isolated_nodes`]: `n` nodes and no arcs.
//! - [`random_graph`]: `m` uniform arcs on `n` nodes from a fixed seed.
//! - [`simple_random_graph`]: the same without parallel arcs.

use std::collections::{HashSet, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scascade_core::{EpidemicId, InitialCondition, NodeId, StopCriterion};
use scascade_graph::{AdjacencyGraph, Network};

pub fn line_graph(n: usize) -> AdjacencyGraph {
    let arcs: Vec<(u32, u32)> = (1..n as u32).map(|v| (v - 1, v)).collect();
    AdjacencyGraph::from_arcs(n, &arcs).unwrap()
}

pub fn star_graph(leaves: usize) -> AdjacencyGraph {
    let arcs: Vec<(u32, u32)> = (1..=leaves as u32).map(|v| (0, v)).collect();
    AdjacencyGraph::from_arcs(leaves + 1, &arcs).unwrap()
}

pub fn triangle_graph() -> AdjacencyGraph {
    AdjacencyGraph::from_arcs(3, &[(0, 1), (0, 2), (1, 2)]).unwrap()
}

pub fn isolated_nodes(n: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_arcs(n, &[]).unwrap()
}

/// `m` arcs with endpoints drawn uniformly (self-loops and parallel arcs allowed).
pub fn random_graph(n: usize, m: usize, seed: u64) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let arcs: Vec<(u32, u32)> = (0..m)
        .map(|_| {
            (
                rng.random_range(0..n as u32),
                rng.random_range(0..n as u32),
            )
        })
        .collect();
    AdjacencyGraph::from_arcs(n, &arcs).unwrap()
}

/// Like [`random_graph`] but without parallel arcs: each `(u, v)` pair is
/// kept at its first occurrence. Self-loops stay.
pub fn simple_random_graph(n: usize, m: usize, seed: u64) -> AdjacencyGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut arcs = Vec::with_capacity(m);
    for _ in 0..m {
        let arc = (
            rng.random_range(0..n as u32),
            rng.random_range(0..n as u32),
        );
        if seen.insert(arc) {
            arcs.push(arc);
        }
    }
    AdjacencyGraph::from_arcs(n, &arcs).unwrap()
}

pub fn ids(v: &[u32]) -> Vec<NodeId> {
    v.iter().map(|&x| NodeId(x)).collect()
}

pub fn condition(id: i64, seeds: &[u32], bound: u32, stop: StopCriterion) -> InitialCondition {
    InitialCondition::new(EpidemicId(id), ids(seeds), bound, stop)
}

/// Breadth-first hop distance from the nearest seed, or `None` if unreachable.
pub fn forward_distances(g: &dyn Network, seeds: &[NodeId]) -> Vec<Option<u32>> {
    let mut dist = vec![None; g.node_count()];
    let mut queue = VecDeque::new();
    for &s in seeds {
        if dist[s.index()].is_none() {
            dist[s.index()] = Some(0);
            queue.push_back(s);
        }
    }
    while let Some(u) = queue.pop_front() {
        let du = dist[u.index()].unwrap();
        for &v in g.out_neighbours(u) {
            if dist[v.index()].is_none() {
                dist[v.index()] = Some(du + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}
