//! Error type for positional list operations
//!
//! The sentinel-returning methods (`insert_at`, `remove_at`, `get_at`) are the
//! primary API. The `try_*` variants report the same failures as a
//! [`ListError`] for callers that want to propagate them with `?`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid range for the operation
    OutOfRange { index: usize, len: usize },

    /// Operation needs at least one node
    EmptyList,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfRange { index, len } => {
                write!(
                    f,
                    "Index {} out of range for list of length {}",
                    index, len
                )
            }
            ListError::EmptyList => write!(f, "List is empty"),
        }
    }
}

impl std::error::Error for ListError {}
