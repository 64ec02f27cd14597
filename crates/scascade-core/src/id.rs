//! Strongly-typed identifiers and the [`Step`] type alias.

use std::fmt;

/// Discrete simulation time.
///
/// Step `0` is reserved for "never infected"; seeds are infected at
/// step `1` and every transmission moves the target one step later.
pub type Step = u32;

/// Identifies a node of the simulated network.
///
/// Node ids are dense: a graph with `n` nodes uses exactly
/// `NodeId(0)..NodeId(n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The id as a `usize`, for indexing per-node arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// User-supplied label of an epidemic, echoed into every trace record.
///
/// Ids are opaque: they are neither required to be unique nor ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpidemicId(pub i64);

impl fmt::Display for EpidemicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EpidemicId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
