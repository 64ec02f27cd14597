//! Network trait compliance test helpers.
//!
//! These functions verify that a `Network` implementation satisfies the
//! invariants the cascade engine relies on.

use scascade_core::NodeId;

use crate::network::Network;

/// Assert that out-degrees sum to the arc count.
pub fn assert_degrees_sum_to_arcs(g: &dyn Network) {
    let total: usize = (0..g.node_count())
        .map(|u| g.out_degree(NodeId(u as u32)))
        .sum();
    assert_eq!(
        total,
        g.arc_count(),
        "sum of out-degrees {total} != arc_count {}",
        g.arc_count()
    );
}

/// Assert that every neighbour is a node of the graph.
pub fn assert_targets_in_range(g: &dyn Network) {
    let n = g.node_count();
    for u in 0..n {
        for v in g.out_neighbours(NodeId(u as u32)) {
            assert!(v.index() < n, "arc {u} -> {v} leaves [0, {n})");
        }
    }
}

/// Assert that `out_degree` agrees with `out_neighbours().len()`.
pub fn assert_degree_matches_list(g: &dyn Network) {
    for u in 0..g.node_count() {
        let id = NodeId(u as u32);
        assert_eq!(g.out_degree(id), g.out_neighbours(id).len());
    }
}

/// Run every compliance check.
pub fn assert_contract(g: &dyn Network) {
    assert!(g.node_count() > 0, "graph must have at least one node");
    assert_degrees_sum_to_arcs(g);
    assert_targets_in_range(g);
    assert_degree_matches_list(g);
}
