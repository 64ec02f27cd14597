//! Compressed adjacency storage and its builder.

use scascade_core::NodeId;

use crate::error::GraphError;
use crate::network::Network;

/// An immutable directed graph stored as offsets + targets.
///
/// The out-neighbours of `u` are `targets[offsets[u]..offsets[u + 1]]`,
/// in the order the arcs were added to the [`GraphBuilder`]. Parallel
/// arcs and self-loops are kept as given.
///
/// # Examples
///
/// ```
/// use scascade_core::NodeId;
/// use scascade_graph::{GraphBuilder, Network};
///
/// let mut b = GraphBuilder::new(3).unwrap();
/// b.add_arc(0, 1).unwrap();
/// b.add_arc(0, 2).unwrap();
/// b.add_arc(1, 2).unwrap();
/// let g = b.build();
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.arc_count(), 3);
/// assert_eq!(g.out_neighbours(NodeId(0)), &[NodeId(1), NodeId(2)]);
/// assert_eq!(g.out_degree(NodeId(2)), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

// Compile-time assertion: AdjacencyGraph must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<AdjacencyGraph>();
};

impl AdjacencyGraph {
    /// Build a graph directly from a list of `(u, v)` arcs.
    ///
    /// Shorthand for a [`GraphBuilder`] fed in slice order.
    pub fn from_arcs(node_count: usize, arcs: &[(u32, u32)]) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new(node_count)?;
        for &(u, v) in arcs {
            builder.add_arc(u, v)?;
        }
        Ok(builder.build())
    }

    /// Highest out-degree over all nodes.
    pub fn max_out_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }
}

impl Network for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn arc_count(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    fn out_neighbours(&self, u: NodeId) -> &[NodeId] {
        let i = u.index();
        &self.targets[self.offsets[i]..self.offsets[i + 1]]
    }
}

/// Accumulates arcs and freezes them into an [`AdjacencyGraph`].
///
/// With [`undirected`](Self::undirected) set, every added arc `u → v`
/// is followed by its reverse `v → u`.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    node_count: usize,
    undirected: bool,
    arcs: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Start a graph with `node_count` nodes and no arcs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if `node_count == 0`, or
    /// [`GraphError::NodeCountOverflow`] if ids would not fit in `u32`.
    pub fn new(node_count: usize) -> Result<Self, GraphError> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if u32::try_from(node_count).is_err() {
            return Err(GraphError::NodeCountOverflow {
                value: node_count as u64,
            });
        }
        Ok(Self {
            node_count,
            undirected: false,
            arcs: Vec::new(),
        })
    }

    /// Mirror every subsequently added arc.
    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    /// Pre-allocate room for `additional` arcs.
    pub fn reserve(&mut self, additional: usize) {
        self.arcs.reserve(additional);
    }

    /// Number of nodes the graph will have.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Add the arc `u → v` (and `v → u` when undirected).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ArcOutOfRange`] if either endpoint is not
    /// in `[0, node_count)`.
    pub fn add_arc(&mut self, u: u32, v: u32) -> Result<(), GraphError> {
        if u as usize >= self.node_count || v as usize >= self.node_count {
            return Err(GraphError::ArcOutOfRange {
                source_node: u64::from(u),
                target: u64::from(v),
                node_count: self.node_count,
            });
        }
        self.arcs.push((NodeId(u), NodeId(v)));
        if self.undirected {
            self.arcs.push((NodeId(v), NodeId(u)));
        }
        Ok(())
    }

    /// Freeze the arcs into an [`AdjacencyGraph`].
    ///
    /// Out-neighbour lists keep insertion order (stable counting sort).
    pub fn build(self) -> AdjacencyGraph {
        let n = self.node_count;
        let mut offsets = vec![0usize; n + 1];
        for &(u, _) in &self.arcs {
            offsets[u.index() + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![NodeId(0); self.arcs.len()];
        for (u, v) in self.arcs {
            let slot = &mut cursor[u.index()];
            targets[*slot] = v;
            *slot += 1;
        }

        AdjacencyGraph { offsets, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn ids(v: &[u32]) -> Vec<NodeId> {
        v.iter().map(|&x| NodeId(x)).collect()
    }

    #[test]
    fn zero_nodes_rejected() {
        assert!(matches!(GraphBuilder::new(0), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn out_of_range_arc_rejected() {
        let mut b = GraphBuilder::new(3).unwrap();
        let err = b.add_arc(0, 3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::ArcOutOfRange {
                source_node: 0,
                target: 3,
                node_count: 3
            }
        ));
    }

    #[test]
    fn insertion_order_preserved_per_node() {
        let g = AdjacencyGraph::from_arcs(4, &[(2, 3), (0, 3), (2, 0), (0, 1), (2, 1)]).unwrap();
        assert_eq!(g.out_neighbours(NodeId(0)), ids(&[3, 1]).as_slice());
        assert_eq!(g.out_neighbours(NodeId(1)), &[] as &[NodeId]);
        assert_eq!(g.out_neighbours(NodeId(2)), ids(&[3, 0, 1]).as_slice());
        assert_eq!(g.max_out_degree(), 3);
        compliance::assert_contract(&g);
    }

    #[test]
    fn undirected_builder_mirrors_arcs() {
        let mut b = GraphBuilder::new(3).unwrap().undirected(true);
        b.add_arc(0, 1).unwrap();
        b.add_arc(1, 2).unwrap();
        let g = b.build();
        assert_eq!(g.arc_count(), 4);
        assert_eq!(g.out_neighbours(NodeId(1)), ids(&[0, 2]).as_slice());
        compliance::assert_contract(&g);
    }

    #[test]
    fn parallel_arcs_and_self_loops_kept() {
        let g = AdjacencyGraph::from_arcs(2, &[(0, 1), (0, 1), (1, 1)]).unwrap();
        assert_eq!(g.arc_count(), 3);
        assert_eq!(g.out_neighbours(NodeId(0)), ids(&[1, 1]).as_slice());
        assert_eq!(g.out_neighbours(NodeId(1)), ids(&[1]).as_slice());
    }

    proptest! {
        #[test]
        fn build_keeps_every_arc(
            n in 1usize..40,
            raw in prop::collection::vec((0u32..40, 0u32..40), 0..200),
        ) {
            let arcs: Vec<(u32, u32)> = raw
                .into_iter()
                .map(|(u, v)| (u % n as u32, v % n as u32))
                .collect();
            let g = AdjacencyGraph::from_arcs(n, &arcs).unwrap();
            prop_assert_eq!(g.arc_count(), arcs.len());
            for u in 0..n as u32 {
                let expected: Vec<NodeId> = arcs
                    .iter()
                    .filter(|(s, _)| *s == u)
                    .map(|&(_, v)| NodeId(v))
                    .collect();
                prop_assert_eq!(g.out_neighbours(NodeId(u)), expected.as_slice());
            }
            compliance::assert_contract(&g);
        }
    }
}
