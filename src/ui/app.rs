//! Main TUI application state and logic

use crate::script::constants::{PLAY_DEBOUNCE_MS, PLAY_INTERVAL_MS};
use crate::script::errors::ScriptError;
use crate::script::runner::Runner;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{ListScrollState, ScriptScrollState, StatusInfo};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Script,
    Console,
    List,
}

impl FocusedPane {
    /// Move focus to the next pane (script -> console -> list)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Script => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::List,
            FocusedPane::List => FocusedPane::Script,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Script => FocusedPane::List,
            FocusedPane::Console => FocusedPane::Script,
            FocusedPane::List => FocusedPane::Console,
        }
    }
}

/// The main application state
pub struct App {
    /// Runner holding the recorded history
    pub runner: Runner,

    /// The script text being shown
    pub source: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub script_scroll: ScriptScrollState,
    pub console_scroll: usize,
    pub list_scroll: ListScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app with the given runner and script text
    pub fn new(runner: Runner, source: String) -> Self {
        let status_message = match runner.error() {
            Some(e) => format!("Stopped: {}", e),
            None => String::from("Ready!"),
        };

        App {
            runner,
            source,
            focused_pane: FocusedPane::Script,
            script_scroll: ScriptScrollState {
                offset: 0,
                target_line_row: None, // Centered on first render
            },
            console_scroll: 0,
            list_scroll: ListScrollState {
                offset: 0,
                prev_item_count: 0,
            },
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing
                && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS)
            {
                if self.runner.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.console_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Script (top) | Console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let is_at_error = self.runner.is_at_error();

        super::panes::render_script_pane(
            frame,
            left_rows[0],
            &self.source,
            self.runner.current_line(),
            is_at_error,
            self.focused_pane == FocusedPane::Script,
            &mut self.script_scroll,
        );

        super::panes::render_console_pane(
            frame,
            left_rows[1],
            self.runner.console(),
            self.runner.current_line(),
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        super::panes::render_list_pane(
            frame,
            columns[1],
            self.runner.chain(),
            self.focused_pane == FocusedPane::List,
            &mut self.list_scroll,
        );

        let chain = self.runner.chain();
        let status = StatusInfo {
            message: &self.status_message,
            current_step: self.runner.history_position(),
            total_steps: self.runner.total_snapshots(),
            list_len: chain.len(),
            is_cyclic: chain.is_cyclic(),
            is_error: is_at_error,
            is_playing: self.is_playing,
        };
        super::panes::render_status_bar(frame, main_chunks[1], &status);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.runner.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.console_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.runner.step_backward();
                self.report_step(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.runner.step_forward();
                self.report_step(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Script => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.script_scroll.target_line_row {
                        self.script_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
                FocusedPane::List => {
                    self.list_scroll.offset = self.list_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Script => {
                    if let Some(row) = self.script_scroll.target_line_row {
                        self.script_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
                FocusedPane::List => {
                    self.list_scroll.offset = self.list_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play, debounced against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(PLAY_DEBOUNCE_MS) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(PLAY_INTERVAL_MS))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let _ = self.runner.jump_to_end();
                self.status_message = match self.runner.error() {
                    Some(e) => format!("Stopped: {}", e),
                    None => "Jumped to end".to_string(),
                };
                self.console_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let _ = self.runner.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.console_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), ScriptError>, ok: &str, failed: &str) {
        match result {
            Ok(()) if self.runner.is_at_error() => {
                if let Some(e) = self.runner.error() {
                    self.status_message = format!("Stopped: {}", e);
                }
                self.console_scroll = usize::MAX;
            }
            Ok(()) => {
                self.status_message = ok.to_string();
                self.console_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("{}: {}", failed, e);
            }
        }
    }
}
