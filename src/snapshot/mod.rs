// Snapshot management for stepping through a script's history

use crate::list::{CyclicFixture, LinkedList, Node, NodeArena, NodeId};
use crate::script::constants::CONSOLE_LINE_ESTIMATE;
use crate::script::errors::ScriptError;

/// Captured narration output
#[derive(Debug, Clone, Default)]
pub struct Console {
    pub lines: Vec<ConsoleLine>,
}

impl Console {
    pub fn new() -> Self {
        Console { lines: Vec::new() }
    }

    /// Record one line of output produced by the command at `source_line`
    pub fn print_line(&mut self, text: impl Into<String>, source_line: usize) {
        self.lines.push(ConsoleLine {
            text: text.into(),
            source_line,
        });
    }

    /// All output lines as plain strings
    pub fn output(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A line of console output with the script line that produced it
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub text: String,
    pub source_line: usize,
}

/// The list as it stands between two commands
#[derive(Debug, Clone)]
pub enum ChainState {
    Linear(LinkedList<i64>),
    Cyclic(CyclicFixture<i64>),
}

impl ChainState {
    pub fn len(&self) -> usize {
        match self {
            ChainState::Linear(list) => list.len(),
            ChainState::Cyclic(fixture) => fixture.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self, ChainState::Cyclic(_))
    }

    pub fn arena(&self) -> &NodeArena<i64> {
        match self {
            ChainState::Linear(list) => list.arena(),
            ChainState::Cyclic(fixture) => fixture.arena(),
        }
    }

    pub fn head(&self) -> Option<NodeId> {
        match self {
            ChainState::Linear(list) => list.head(),
            ChainState::Cyclic(fixture) => fixture.head(),
        }
    }

    /// Handles in chain order, each node once
    pub fn node_ids(&self) -> Vec<NodeId> {
        match self {
            ChainState::Linear(list) => list.node_ids(),
            ChainState::Cyclic(fixture) => fixture.node_ids(),
        }
    }

    /// Where the tail links back to, for cyclic chains
    pub fn back_link(&self) -> Option<NodeId> {
        match self {
            ChainState::Linear(_) => None,
            ChainState::Cyclic(fixture) => fixture.arena().next_of(fixture.tail()),
        }
    }
}

impl Default for ChainState {
    fn default() -> Self {
        ChainState::Linear(LinkedList::new())
    }
}

/// State captured after one command
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub chain: ChainState,
    pub console: Console,
    pub source_line: usize,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Slots are kept even when vacant
        let chain_size = self.chain.arena().slot_count() * std::mem::size_of::<Node<i64>>();
        let console_size = self.console.len() * CONSOLE_LINE_ESTIMATE;

        std::mem::size_of::<Snapshot>() + chain_size + console_size
    }
}

/// Execution history with a memory budget
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), ScriptError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(ScriptError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
