//! Runtime error types for the script runner
//!
//! Out-of-range indices are not errors here: they come back from the list as
//! sentinel values and are narrated as `false` / `null`. A [`ScriptError`]
//! stops the run; the snapshots captured before it stay browsable.

use crate::list::ListError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// A command that walks or mutates the chain ran while it was cyclic
    CyclicList { command: String, line: usize },

    /// `uncycle` on a list that has no cycle
    NotCyclic { line: usize },

    /// `cycle` target rejected by the list
    List { source: ListError, line: usize },

    /// Snapshot history budget exhausted
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// Stepping past either end of the history
    History { message: String },
}

impl ScriptError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::CyclicList { line, .. } => Some(*line),
            ScriptError::NotCyclic { line } => Some(*line),
            ScriptError::List { line, .. } => Some(*line),
            ScriptError::SnapshotLimitExceeded { .. } => None,
            ScriptError::History { .. } => None,
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::CyclicList { command, line } => {
                write!(
                    f,
                    "'{}' needs an acyclic list at line {} (run 'uncycle' or 'clear' first)",
                    command, line
                )
            }
            ScriptError::NotCyclic { line } => {
                write!(f, "List has no cycle to remove at line {}", line)
            }
            ScriptError::List { source, line } => {
                write!(f, "{} at line {}", source, line)
            }
            ScriptError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            ScriptError::History { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::List { source, .. } => Some(source),
            _ => None,
        }
    }
}
