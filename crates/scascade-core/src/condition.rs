//! Initial conditions: who is infected at step 1, and when to stop.

use smallvec::{smallvec, SmallVec};

use crate::error::ConditionError;
use crate::id::{EpidemicId, NodeId};
use crate::stop::StopCriterion;

/// Seed set of an epidemic, in input order.
///
/// Most epidemics start from a handful of nodes, so the first four are
/// stored inline.
pub type SeedList = SmallVec<[NodeId; 4]>;

/// Everything needed to start one epidemic on a graph.
///
/// Seed order is significant: seeds are enqueued into the active
/// frontier in the order they appear here, which fixes the order of
/// the step-1 trace records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialCondition {
    /// Label echoed into every trace record.
    pub id: EpidemicId,
    /// Nodes infected at step 1, in input order.
    pub seeds: SeedList,
    /// Bound interpreted according to `stop`.
    pub bound: u32,
    /// Which quantity `bound` limits.
    pub stop: StopCriterion,
}

impl InitialCondition {
    /// Create an initial condition.
    ///
    /// No validation happens here; call [`validate`](Self::validate)
    /// once the node count of the target graph is known.
    pub fn new(
        id: EpidemicId,
        seeds: impl IntoIterator<Item = NodeId>,
        bound: u32,
        stop: StopCriterion,
    ) -> Self {
        Self {
            id,
            seeds: seeds.into_iter().collect(),
            bound,
            stop,
        }
    }

    /// The default epidemic used when no initial conditions are given:
    /// id 0, a single seed at node 0.
    pub fn trivial(bound: u32, stop: StopCriterion) -> Self {
        Self {
            id: EpidemicId(0),
            seeds: smallvec![NodeId(0)],
            bound,
            stop,
        }
    }

    /// Replace the bound and stop criterion.
    pub fn with_bound(mut self, bound: u32, stop: StopCriterion) -> Self {
        self.bound = bound;
        self.stop = stop;
        self
    }

    /// Check the condition against a graph of `node_count` nodes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the seed set is empty, a seed is outside
    /// `[0, node_count)`, a seed appears twice, or the bound is zero.
    pub fn validate(&self, node_count: usize) -> Result<(), ConditionError> {
        if self.seeds.is_empty() {
            return Err(ConditionError::NoSeeds { id: self.id });
        }
        if self.bound == 0 {
            return Err(ConditionError::ZeroBound { id: self.id });
        }
        if let Some(&seed) = self.seeds.iter().find(|s| s.index() >= node_count) {
            return Err(ConditionError::SeedOutOfRange {
                id: self.id,
                seed,
                node_count,
            });
        }
        let mut sorted: SmallVec<[NodeId; 8]> = self.seeds.iter().copied().collect();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConditionError::DuplicateSeed {
                id: self.id,
                seed: pair[0],
            });
        }
        Ok(())
    }
}
