// Constants for the script runner and UI

/// Default snapshot history budget in bytes (64 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Interval between steps in auto-play mode, in milliseconds
pub const PLAY_INTERVAL_MS: u64 = 1000;

/// Minimum delay between two space presses, in milliseconds
pub const PLAY_DEBOUNCE_MS: u64 = 200;

/// Rough per-line cost of captured console output, in bytes
pub const CONSOLE_LINE_ESTIMATE: usize = 50;

/// Comment marker in script files
pub const COMMENT_PREFIX: char = '#';
