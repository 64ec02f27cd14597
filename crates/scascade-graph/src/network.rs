//! The core `Network` trait.

use scascade_core::NodeId;

/// Read-only directed graph consumed by the cascade engine.
///
/// The engine only asks for the node count and for each node's
/// out-neighbours. Out-neighbour order is significant: it is the order in
/// which transmission attempts from a node are made, and therefore the
/// order of that node's trace records.
///
/// Parallel arcs and self-loops are allowed. Each stored copy of an arc is
/// a separate transmission attempt, so on a multigraph a pair `(u, v)` can
/// appear in one run's trace once per copy; on a simple graph at most once.
///
/// # Thread Safety
///
/// `Sync` is required because one graph is shared by every worker of a
/// batch through `&dyn Network`.
pub trait Network: Send + Sync {
    /// Number of nodes `n`. Node ids are `0..n`.
    fn node_count(&self) -> usize;

    /// Number of stored arcs `m`.
    fn arc_count(&self) -> usize;

    /// Out-neighbours of `u`, in stored order.
    ///
    /// # Panics
    ///
    /// May panic if `u` is not a node of the graph.
    fn out_neighbours(&self, u: NodeId) -> &[NodeId];

    /// Out-degree of `u`.
    fn out_degree(&self, u: NodeId) -> usize {
        self.out_neighbours(u).len()
    }
}
