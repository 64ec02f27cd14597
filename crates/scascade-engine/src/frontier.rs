//! Fixed-capacity FIFO of node ids: the active frontier of one epidemic.
//!
//! [`Frontier`] is a ring over a boxed slice with a head index and a
//! length, so all `capacity` slots are usable. It is owned by exactly one
//! worker running exactly one epidemic and needs no synchronisation.

use scascade_core::NodeId;

use crate::error::FrontierError;

/// A bounded first-in first-out queue of [`NodeId`]s.
///
/// An epidemic on a graph of `n` nodes enqueues each node at most once,
/// so a frontier of capacity `n` never fills during a correct run.
///
/// # Examples
///
/// ```
/// use scascade_core::NodeId;
/// use scascade_engine::Frontier;
///
/// let mut f = Frontier::new(2).unwrap();
/// f.push(NodeId(7)).unwrap();
/// f.push(NodeId(3)).unwrap();
/// assert!(f.is_full());
/// assert!(f.push(NodeId(1)).is_err());
///
/// assert_eq!(f.pop(), Some(NodeId(7)));
/// assert_eq!(f.pop(), Some(NodeId(3)));
/// assert_eq!(f.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Frontier {
    slots: Box<[NodeId]>,
    head: usize,
    len: usize,
}

impl Frontier {
    /// Allocate a frontier holding up to `capacity` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, FrontierError> {
        if capacity == 0 {
            return Err(FrontierError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![NodeId(0); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    /// Whether no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether another push would fail.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of queued nodes.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append `node` at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Full`] if the frontier is full; the
    /// frontier is left unchanged.
    pub fn push(&mut self, node: NodeId) -> Result<(), FrontierError> {
        let capacity = self.slots.len();
        if self.len == capacity {
            return Err(FrontierError::Full { capacity });
        }
        let tail = (self.head + self.len) % capacity;
        self.slots[tail] = node;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head, or `None` if empty.
    pub fn pop(&mut self) -> Option<NodeId> {
        if self.len == 0 {
            return None;
        }
        let node = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(node)
    }
}
