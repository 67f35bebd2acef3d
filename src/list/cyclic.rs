//! Deliberately cyclic chain for exercising cycle detection
//!
//! A [`CyclicFixture`] is the only place a cyclic chain can exist. It is
//! built by consuming a [`LinkedList`] with
//! [`LinkedList::into_cyclic`], so a list that callers still hold can never
//! be corrupted, and it only offers walks that stop on a cycle.
//! [`CyclicFixture::repair`] cuts the back link and returns a normal list.

use super::algorithms;
use super::arena::{NodeArena, NodeId};
use super::errors::ListError;
use super::linked::LinkedList;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CyclicFixture<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    tail: NodeId,
    size: usize,
}

impl<T> CyclicFixture<T> {
    pub(super) fn new(arena: NodeArena<T>, head: Option<NodeId>, tail: NodeId, size: usize) -> Self {
        CyclicFixture {
            arena,
            head,
            tail,
            size,
        }
    }

    /// Number of distinct nodes in the chain
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Node whose link closes the cycle
    pub fn tail(&self) -> NodeId {
        self.tail
    }

    pub fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }

    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(&self.arena, self.head)
    }

    /// Handle of the first node inside the cycle
    pub fn entry_id(&self) -> Option<NodeId> {
        algorithms::cycle_entry(&self.arena, self.head)
    }

    /// Value of the first node inside the cycle
    pub fn cycle_entry(&self) -> Option<&T> {
        self.entry_id().and_then(|id| self.arena.value(id))
    }

    /// Handles from head to tail, each visited once
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.size);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            if id == self.tail {
                break;
            }
            current = self.arena.next_of(id);
        }
        ids
    }

    /// Cut the back link, restoring an acyclic list with the same values
    pub fn repair(mut self) -> LinkedList<T> {
        self.arena.set_next(self.tail, None);
        LinkedList::from_parts(self.arena, self.head, self.size)
    }
}

/// `1 -> 2 -> 3 -> (back to 2)`
impl<T: fmt::Display> fmt::Display for CyclicFixture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self.node_ids();
        for (i, id) in ids.iter().enumerate() {
            if let Some(value) = self.arena.value(*id) {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", value)?;
            }
        }

        match self.cycle_entry() {
            Some(entry) => write!(f, " -> (back to {})", entry),
            None => write!(f, " -> null"),
        }
    }
}

/// Rejected [`LinkedList::into_cyclic`] request
///
/// Carries the list back so a bad target index does not cost the caller its
/// data.
pub struct CycleRequestError<T> {
    pub list: LinkedList<T>,
    pub reason: ListError,
}

impl<T> fmt::Debug for CycleRequestError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleRequestError")
            .field("len", &self.list.len())
            .field("reason", &self.reason)
            .finish()
    }
}

impl<T> fmt::Display for CycleRequestError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot close a cycle: {}", self.reason)
    }
}

impl<T> std::error::Error for CycleRequestError<T> {}
