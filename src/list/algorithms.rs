//! Chain algorithms that operate on a head handle and its arena
//!
//! These are free functions rather than list methods so they can run over
//! any chain stored in a [`NodeArena`], including the deliberately cyclic one
//! held by a [`CyclicFixture`](super::cyclic::CyclicFixture).

use super::arena::{NodeArena, NodeId};
use rustc_hash::FxHashSet;

/// Reverse a chain in place and return the new head (the old tail).
///
/// O(n) time, O(1) extra space. Only `next` links are rewritten; no node is
/// allocated or moved. Empty and single-node chains come back unchanged.
///
/// The chain must be acyclic.
pub fn reverse<T>(arena: &mut NodeArena<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut prev = None;
    let mut current = head;

    while let Some(id) = current {
        let next = arena.set_next(id, prev); // Reverse the link, keep the old one
        prev = Some(id);
        current = next;
    }

    prev
}

/// Floyd's tortoise-and-hare cycle check.
///
/// `slow` advances one link per step and `fast` two. Reaching the end means
/// the chain is acyclic. Once both are inside a cycle of length L the gap
/// between them shrinks by one per step modulo L, so they meet within L
/// steps. O(n) time, O(1) space.
pub fn has_cycle<T>(arena: &NodeArena<T>, head: Option<NodeId>) -> bool {
    meeting_point(arena, head).is_some()
}

/// First node of the cycle, or `None` for an acyclic chain.
///
/// After slow and fast meet, a handle restarted at the head and the slow
/// handle both advance one link per step; they meet again at the cycle
/// entry.
pub fn cycle_entry<T>(arena: &NodeArena<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut inside = meeting_point(arena, head)?;
    let mut outside = head?;

    while outside != inside {
        outside = arena.next_of(outside)?;
        inside = arena.next_of(inside)?;
    }

    Some(outside)
}

/// Visited-set cycle check: O(n) time and O(n) space.
///
/// Kept as an independent oracle for [`has_cycle`].
pub fn has_cycle_by_visit<T>(arena: &NodeArena<T>, head: Option<NodeId>) -> bool {
    let mut seen = FxHashSet::default();
    let mut current = head;

    while let Some(id) = current {
        if !seen.insert(id) {
            return true;
        }
        current = arena.next_of(id);
    }

    false
}

fn meeting_point<T>(arena: &NodeArena<T>, head: Option<NodeId>) -> Option<NodeId> {
    let mut slow = head?;
    let mut fast = head?;

    loop {
        // Fast (or its successor) falling off the end means no cycle
        fast = arena.next_of(fast)?;
        fast = arena.next_of(fast)?;
        slow = arena.next_of(slow)?;

        if slow == fast {
            return Some(slow);
        }
    }
}
