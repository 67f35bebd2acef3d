//! Node storage for the linked list
//!
//! Nodes live in a [`NodeArena`], a growable vector of slots addressed by
//! [`NodeId`] handles. Links between nodes are handles, not references, so
//! rewiring a chain never needs two live mutable borrows.
//!
//! # Slot Reuse
//!
//! Removing a node tombstones its slot and threads it onto a free list. The
//! next insertion takes the most recently freed slot before growing the
//! vector, so handles of the remaining nodes never move.

use std::fmt;

/// Handle to a node slot in a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Slot index this handle refers to
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single chain element: one value and the link to its successor
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }
}

/// State of an arena slot
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> }, // Tombstone, reusable
}

/// Vec-backed node store with a free list
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Store a node, reusing a vacant slot when one is available
    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        self.live += 1;

        if let Some(id) = self.free_head {
            if let Slot::Vacant { next_free } = self.slots[id.index()] {
                self.free_head = next_free;
            }
            self.slots[id.index()] = Slot::Occupied(node);
            return id;
        }

        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot::Occupied(node));
        id
    }

    /// Take a node out of its slot, leaving a tombstone behind
    pub fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.index())?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id);
        self.live -= 1;

        match vacated {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Successor of `id`, or `None` at the terminal node or a vacant slot
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.next)
    }

    /// Rewrite the link of `id`; returns the previous link
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> Option<NodeId> {
        self.get_mut(id)
            .and_then(|node| std::mem::replace(&mut node.next, next))
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(|node| &node.value)
    }

    /// Number of occupied slots
    pub fn live(&self) -> usize {
        self.live
    }

    /// Total slots, including tombstones
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_vacant(&self, id: NodeId) -> bool {
        !matches!(self.slots.get(id.index()), Some(Slot::Occupied(_)))
    }

    /// Drop every node and release the slot storage
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = None;
        self.live = 0;
    }

    /// Every slot in order with whether it is occupied (for display)
    pub fn slot_states(&self) -> impl Iterator<Item = (NodeId, bool)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (NodeId(i as u32), matches!(slot, Slot::Occupied(_))))
    }

    /// Handles of all occupied slots in slot order
    pub fn occupied(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slot_states()
            .filter(|(_, occupied)| *occupied)
            .map(|(id, _)| id)
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));

        assert_eq!(arena.value(a), Some(&1));
        assert_eq!(arena.value(b), Some(&2));
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.slot_count(), 2);
    }

    #[test]
    fn test_remove_leaves_tombstone() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new('a'));
        let _b = arena.insert(Node::new('b'));

        let removed = arena.remove(a).unwrap();
        assert_eq!(removed.value, 'a');
        assert!(arena.is_vacant(a));
        assert_eq!(arena.live(), 1);
        assert_eq!(arena.slot_count(), 2);

        // Double remove is refused
        assert!(arena.remove(a).is_none());
        assert_eq!(arena.live(), 1);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new(10));
        let b = arena.insert(Node::new(20));
        arena.remove(a);
        arena.remove(b);

        // Most recently freed first
        assert_eq!(arena.insert(Node::new(30)), b);
        assert_eq!(arena.insert(Node::new(40)), a);
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena.value(a), Some(&40));
    }

    #[test]
    fn test_set_next_returns_old_link() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));

        assert_eq!(arena.set_next(a, Some(b)), None);
        assert_eq!(arena.next_of(a), Some(b));
        assert_eq!(arena.set_next(a, None), Some(b));
        assert_eq!(arena.next_of(a), None);
    }

    #[test]
    fn test_occupied_skips_tombstones() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Node::new(1));
        let b = arena.insert(Node::new(2));
        let c = arena.insert(Node::new(3));
        arena.remove(b);

        let ids: Vec<NodeId> = arena.occupied().collect();
        assert_eq!(ids, vec![a, c]);
    }
}
