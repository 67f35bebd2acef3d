//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`script`]: script display with command highlighting and current line indicator
//! - [`list`]: node chain table, cycle marker and arena slot map
//! - [`console`]: narration printed by the script's commands
//! - [`status`]: status bar with keybindings and execution state
//!
//! Each pane module exports a `render_*` function plus whatever scroll state
//! it keeps between frames.

pub mod console;
pub mod list;
pub mod script;
pub mod status;

pub use console::render_console_pane;
pub use list::{render_list_pane, ListScrollState};
pub use script::{render_script_pane, ScriptScrollState};
pub use status::{render_status_bar, StatusInfo};
