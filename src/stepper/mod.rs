//! Bubble sort stepping engine
//!
//! This module provides the core state machine:
//! - [`state`]: [`SortState`], the array plus cursors, counters and event log
//! - [`engine`]: [`Stepper`], which advances a state one comparison at a time
//! - [`errors`]: [`StepperError`] for internal invariant violations
//!
//! # Execution Model
//!
//! Each call to [`Stepper::step`] performs exactly one comparison of the pair
//! under the cursor and swaps it when the left value is strictly greater.
//! A pass ends when the cursor reaches the unsorted tail; a pass without any
//! swap ends the whole sort early.
//!
//! ```text
//! NotStarted --init--> Running(pass, cursor) --step--> Running | Finished
//!                  \--(n = 1)--> Finished --step--> Finished
//! ```

pub mod constants;
pub mod engine;
pub mod errors;
pub mod state;

pub use engine::{StepOutcome, Stepper};
pub use errors::StepperError;
pub use state::{LogEntry, SortState};
