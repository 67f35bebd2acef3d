//! Script harness: parsing and executing list commands
//!
//! - [`command`]: the line-based command language and its [`ParseError`]
//! - [`runner`]: [`Runner`], which executes a script and captures snapshots
//! - [`errors`]: [`ScriptError`], the errors that stop a run
//! - [`constants`]: snapshot budget and UI timing defaults
//!
//! [`ParseError`]: command::ParseError
//! [`Runner`]: runner::Runner
//! [`ScriptError`]: errors::ScriptError

pub mod command;
pub mod constants;
pub mod errors;
pub mod runner;
