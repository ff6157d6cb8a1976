// Constants for the sort stepper and session

/// Input shown in the input box when the app starts without arguments
pub const DEFAULT_INPUT: &str = "45, 12, 88, 5, 60, 22, 75, 30";

/// Default byte budget for the undo history (64 MiB)
pub const DEFAULT_HISTORY_LIMIT: usize = 64 * 1024 * 1024;

/// Default delay between automatic steps in play mode, in milliseconds
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 1000;
