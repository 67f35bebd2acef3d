// Execution engine for list scripts

use crate::list::LinkedList;
use crate::script::command::{Command, CommandKind, Script};
use crate::script::errors::ScriptError;
use crate::snapshot::{ChainState, Console, Snapshot, SnapshotManager};

/// Runs a [`Script`] against one list and records its history
pub struct Runner {
    /// Parsed commands
    script: Script,

    /// The list being worked on
    chain: ChainState,

    /// Captured narration
    console: Console,

    /// Script line of the command that produced the current state
    current_line: usize,

    /// Snapshot history for stepping backward/forward
    snapshot_manager: SnapshotManager,

    /// Current position in the history
    history_position: usize,

    /// Whether run() has completed (successfully or not)
    finished: bool,

    /// Error that stopped the run, if any
    error: Option<ScriptError>,
}

impl Runner {
    /// Create a runner for a parsed script
    pub fn new(script: Script, snapshot_memory_limit: usize) -> Self {
        let first_line = script.commands.first().map_or(1, |c| c.line);

        Runner {
            script,
            chain: ChainState::default(),
            console: Console::new(),
            current_line: first_line,
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            history_position: 0,
            finished: false,
            error: None,
        }
    }

    /// Execute every command, capturing a snapshot before the first one and
    /// after each one.
    ///
    /// On error the failing line is captured too (with the list unchanged) so
    /// the history ends where execution stopped.
    pub fn run(&mut self) -> Result<(), ScriptError> {
        let result = self.run_commands();
        self.finished = true;
        if let Err(e) = &result {
            self.error = Some(e.clone());
        }
        result
    }

    fn run_commands(&mut self) -> Result<(), ScriptError> {
        self.capture()?;

        for index in 0..self.script.commands.len() {
            let command = self.script.commands[index].clone();
            self.current_line = command.line;

            if let Err(e) = self.execute(&command) {
                // Best effort: the budget may already be spent
                let _ = self.capture();
                return Err(e);
            }

            self.capture()?;
        }

        Ok(())
    }

    fn execute(&mut self, command: &Command) -> Result<(), ScriptError> {
        let line = command.line;

        match &command.kind {
            CommandKind::Echo(text) => {
                self.console.print_line(text.clone(), line);
            }
            CommandKind::Append(value) => {
                self.linear_mut(command)?.append(*value);
            }
            CommandKind::Prepend(value) => {
                self.linear_mut(command)?.prepend(*value);
            }
            CommandKind::Insert { value, index } => {
                let list = self.linear_mut(command)?;
                let inserted = match to_index(*index) {
                    Some(index) => list.insert_at(*value, index),
                    None => false,
                };
                self.console.print_line(inserted.to_string(), line);
            }
            CommandKind::Remove(index) => {
                let list = self.linear_mut(command)?;
                let removed = to_index(*index).and_then(|index| list.remove_at(index));
                self.console.print_line(or_null(removed), line);
            }
            CommandKind::Get(index) => {
                let list = self.linear_mut(command)?;
                let value = to_index(*index).and_then(|index| list.get_at(index).copied());
                self.console.print_line(or_null(value), line);
            }
            CommandKind::Size => {
                self.console.print_line(self.chain.len().to_string(), line);
            }
            CommandKind::Print => {
                // The fixture's walk stops at the back link
                let text = match &self.chain {
                    ChainState::Linear(list) => list.to_string(),
                    ChainState::Cyclic(fixture) => fixture.to_string(),
                };
                self.console.print_line(text, line);
            }
            CommandKind::Array => {
                let values = self.linear_mut(command)?.to_vec();
                self.console.print_line(format!("{:?}", values), line);
            }
            CommandKind::Reverse => {
                self.linear_mut(command)?.reverse();
            }
            CommandKind::Cycle(target) => {
                let list = match std::mem::take(&mut self.chain) {
                    ChainState::Linear(list) => list,
                    cyclic => {
                        self.chain = cyclic;
                        return Err(cyclic_error(command));
                    }
                };

                match list.into_cyclic(*target) {
                    Ok(fixture) => self.chain = ChainState::Cyclic(fixture),
                    Err(rejected) => {
                        self.chain = ChainState::Linear(rejected.list);
                        return Err(ScriptError::List {
                            source: rejected.reason,
                            line,
                        });
                    }
                }
            }
            CommandKind::Uncycle => match std::mem::take(&mut self.chain) {
                ChainState::Cyclic(fixture) => self.chain = ChainState::Linear(fixture.repair()),
                linear => {
                    self.chain = linear;
                    return Err(ScriptError::NotCyclic { line });
                }
            },
            CommandKind::HasCycle => {
                let found = match &self.chain {
                    ChainState::Linear(list) => list.has_cycle(),
                    ChainState::Cyclic(fixture) => fixture.has_cycle(),
                };
                self.console.print_line(found.to_string(), line);
            }
            CommandKind::Clear => {
                // Also discards a fixture
                self.chain = ChainState::Linear(LinkedList::new());
            }
        }

        Ok(())
    }

    fn linear_mut(&mut self, command: &Command) -> Result<&mut LinkedList<i64>, ScriptError> {
        match &mut self.chain {
            ChainState::Linear(list) => Ok(list),
            ChainState::Cyclic(_) => Err(cyclic_error(command)),
        }
    }

    fn capture(&mut self) -> Result<(), ScriptError> {
        let snapshot = Snapshot {
            chain: self.chain.clone(),
            console: self.console.clone(),
            source_line: self.current_line,
        };
        self.snapshot_manager.push(snapshot)?;
        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.chain = snapshot.chain.clone();
        self.console = snapshot.console.clone();
        self.current_line = snapshot.source_line;
    }

    fn restore_at(&mut self, position: usize) -> Result<(), ScriptError> {
        let snapshot = self
            .snapshot_manager
            .get(position)
            .cloned()
            .ok_or_else(|| ScriptError::History {
                message: "Snapshot not found in history".to_string(),
            })?;
        self.history_position = position;
        self.restore_snapshot(&snapshot);
        Ok(())
    }

    /// Step backward in history
    pub fn step_backward(&mut self) -> Result<(), ScriptError> {
        if self.history_position == 0 {
            return Err(ScriptError::History {
                message: "Already at the beginning of execution".to_string(),
            });
        }
        self.restore_at(self.history_position - 1)
    }

    /// Step forward in history
    pub fn step_forward(&mut self) -> Result<(), ScriptError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(ScriptError::History {
                message: "No more snapshots available (execution finished)".to_string(),
            });
        }
        self.restore_at(self.history_position + 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), ScriptError> {
        if self.snapshot_manager.is_empty() {
            return Err(ScriptError::History {
                message: "No snapshots available".to_string(),
            });
        }
        self.restore_at(0)
    }

    /// Jump to the last captured snapshot
    pub fn jump_to_end(&mut self) -> Result<(), ScriptError> {
        match self.snapshot_manager.len() {
            0 => Err(ScriptError::History {
                message: "No snapshots available".to_string(),
            }),
            len => self.restore_at(len - 1),
        }
    }

    // ========== Getter methods for UI ==========

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn chain(&self) -> &ChainState {
        &self.chain
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    pub fn memory_usage(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn error(&self) -> Option<&ScriptError> {
        self.error.as_ref()
    }

    /// Whether the current position is the snapshot where execution failed
    pub fn is_at_error(&self) -> bool {
        self.error.is_some() && self.history_position + 1 == self.snapshot_manager.len()
    }
}

fn to_index(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}

fn or_null(value: Option<i64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

fn cyclic_error(command: &Command) -> ScriptError {
    ScriptError::CyclicList {
        command: command.kind.keyword().to_string(),
        line: command.line,
    }
}
