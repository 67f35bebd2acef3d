//! Singly linked list over a node arena
//!
//! [`LinkedList`] owns its nodes through a [`NodeArena`] and keeps a running
//! `size`. Every node is reachable from `head` exactly once and the arena
//! holds no other live nodes, so `size == arena.live()` after every public
//! call. None of the methods here can create a cycle; cyclic chains only
//! exist inside a [`CyclicFixture`].

use super::algorithms;
use super::arena::{Node, NodeArena, NodeId};
use super::cyclic::{CycleRequestError, CyclicFixture};
use super::errors::ListError;
use std::fmt;

/// An ordered, singly linked sequence of owned nodes
#[derive(Clone)]
pub struct LinkedList<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    size: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        LinkedList {
            arena: NodeArena::new(),
            head: None,
            size: 0,
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Handle of the first node
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Backing node store (for inspection and the free algorithms)
    pub fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }

    /// Add a node after the terminal node - O(n)
    pub fn append(&mut self, value: T) {
        let id = self.arena.insert(Node::new(value));

        match self.tail() {
            Some(tail) => {
                self.arena.set_next(tail, Some(id));
            }
            None => self.head = Some(id),
        }

        self.size += 1;
    }

    /// Add a node in front of the head - O(1)
    pub fn prepend(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        self.size += 1;
    }

    /// Insert `value` so that it ends up at `index` - O(index)
    ///
    /// Valid for `0 <= index <= len()`. Returns `false` and leaves the list
    /// untouched otherwise.
    pub fn insert_at(&mut self, value: T, index: usize) -> bool {
        self.try_insert_at(value, index).is_ok()
    }

    pub fn try_insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if index > self.size {
            return Err(ListError::OutOfRange {
                index,
                len: self.size,
            });
        }

        if index == 0 {
            self.prepend(value);
            return Ok(());
        }

        let prev = self.node_at(index - 1).ok_or(ListError::OutOfRange {
            index,
            len: self.size,
        })?;
        let id = self.arena.insert(Node {
            value,
            next: self.arena.next_of(prev),
        });
        self.arena.set_next(prev, Some(id));
        self.size += 1;
        Ok(())
    }

    /// Unlink the node at `index` and return its value - O(index)
    ///
    /// Valid for `0 <= index < len()`; returns `None` otherwise.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.try_remove_at(index).ok()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if self.size == 0 {
            return Err(ListError::EmptyList);
        }
        if index >= self.size {
            return Err(ListError::OutOfRange {
                index,
                len: self.size,
            });
        }

        let out_of_range = ListError::OutOfRange {
            index,
            len: self.size,
        };

        let target = if index == 0 {
            let head = self.head.ok_or(ListError::EmptyList)?;
            self.head = self.arena.next_of(head);
            head
        } else {
            let prev = self.node_at(index - 1).ok_or(out_of_range.clone())?;
            let target = self.arena.next_of(prev).ok_or(out_of_range.clone())?;
            self.arena.set_next(prev, self.arena.next_of(target));
            target
        };

        let node = self.arena.remove(target).ok_or(out_of_range)?;
        self.size -= 1;
        Ok(node.value)
    }

    /// Value at `index`, or `None` when `index >= len()` - O(index)
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.node_at(index).and_then(|id| self.arena.value(id))
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.size = 0;
    }

    /// Reverse the link direction of every node in place
    pub fn reverse(&mut self) {
        self.head = algorithms::reverse(&mut self.arena, self.head);
    }

    /// Run Floyd's check over the chain
    ///
    /// Always `false` for a `LinkedList`; the method exists so the check can be
    /// shown against the same structure before and after
    /// [`into_cyclic`](Self::into_cyclic).
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(&self.arena, self.head)
    }

    /// Redirect the terminal node's link to the node at `target` and hand the
    /// now-cyclic chain over to a [`CyclicFixture`]
    ///
    /// A rejected request gives the list back untouched inside the error.
    pub fn into_cyclic(self, target: usize) -> Result<CyclicFixture<T>, CycleRequestError<T>> {
        if self.size == 0 {
            return Err(CycleRequestError {
                list: self,
                reason: ListError::EmptyList,
            });
        }

        let (entry, tail) = match (self.node_at(target), self.tail()) {
            (Some(entry), Some(tail)) => (entry, tail),
            _ => {
                let reason = ListError::OutOfRange {
                    index: target,
                    len: self.size,
                };
                return Err(CycleRequestError { list: self, reason });
            }
        };

        let LinkedList {
            mut arena,
            head,
            size,
        } = self;
        arena.set_next(tail, Some(entry));

        Ok(CyclicFixture::new(arena, head, tail, size))
    }

    /// Borrowing iterator over the values, head first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.head,
            remaining: self.size,
        }
    }

    /// Handles in chain order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.size);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.arena.next_of(id);
        }
        ids
    }

    /// Rebuild from a repaired fixture chain
    pub(super) fn from_parts(arena: NodeArena<T>, head: Option<NodeId>, size: usize) -> Self {
        LinkedList { arena, head, size }
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.size {
            return None;
        }

        let mut current = self.head?;
        for _ in 0..index {
            current = self.arena.next_of(current)?;
        }
        Some(current)
    }

    fn tail(&self) -> Option<NodeId> {
        let mut current = self.head?;
        while let Some(next) = self.arena.next_of(current) {
            current = next;
        }
        Some(current)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Forward-ordered copy of the values
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `10 -> 20 -> null`
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "null")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Track the tail locally so bulk appends stay linear
        let mut tail = self.tail();
        for value in iter {
            let id = self.arena.insert(Node::new(value));
            match tail {
                Some(prev) => {
                    self.arena.set_next(prev, Some(id));
                }
                None => self.head = Some(id),
            }
            tail = Some(id);
            self.size += 1;
        }
    }
}

/// Iterator over `&T`, head first
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id)?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; pops from the head
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_at(0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
