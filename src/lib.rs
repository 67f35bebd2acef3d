//! # Introduction
//!
//! linkview is a singly linked list with positional operations, in-place
//! reversal and Floyd's cycle detection, plus a harness that runs a small
//! command script against the list, captures a snapshot after every command,
//! and lets you step through the history in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Script text → Parser → Commands → Runner → Snapshots → TUI
//! ```
//!
//! 1. [`list`]: the core, [`list::LinkedList`] over a [`list::NodeArena`],
//!    the free algorithms [`list::reverse`] and [`list::has_cycle`], and
//!    [`list::CyclicFixture`] for building a cyclic chain on purpose.
//! 2. [`script`]: the command language and the [`script::runner::Runner`].
//! 3. [`snapshot`]: list state and console output captured per command,
//!    held in a memory-bounded [`snapshot::SnapshotManager`].
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use linkview::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = [10, 20, 30].into_iter().collect();
//! list.prepend(5);
//! assert!(list.insert_at(15, 2));
//! assert_eq!(list.to_string(), "5 -> 10 -> 15 -> 20 -> 30 -> null");
//! assert_eq!(list.remove_at(2), Some(15));
//!
//! let fixture = list.into_cyclic(1).unwrap();
//! assert!(fixture.has_cycle());
//! ```

pub mod list;
pub mod script;
pub mod snapshot;
pub mod ui;
