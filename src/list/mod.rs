//! Singly linked list and its algorithms
//!
//! - [`arena`]: [`NodeArena`] slot store and [`NodeId`] handles
//! - [`linked`]: the [`LinkedList`] container with positional operations
//! - [`algorithms`]: in-place reversal and Floyd's cycle detection
//! - [`cyclic`]: [`CyclicFixture`], the only holder of a cyclic chain
//! - [`errors`]: [`ListError`] for the `try_*` operations
//!
//! # Costs
//!
//! ```text
//! append      O(n)      walks to the terminal node
//! prepend     O(1)
//! insert_at   O(index)
//! remove_at   O(index)
//! get_at      O(index)
//! reverse     O(n) time, O(1) space
//! has_cycle   O(n) time, O(1) space
//! ```

pub mod algorithms;
pub mod arena;
pub mod cyclic;
pub mod errors;
pub mod linked;

pub use algorithms::{cycle_entry, has_cycle, has_cycle_by_visit, reverse};
pub use arena::{Node, NodeArena, NodeId};
pub use cyclic::{CycleRequestError, CyclicFixture};
pub use errors::ListError;
pub use linked::LinkedList;
