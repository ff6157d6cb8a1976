//! # Introduction
//!
//! BubbleTTY sorts a list of integers with bubble sort one comparison at a
//! time, so every comparison and swap can be watched, undone, replayed or run
//! to the end.  The interactive front end is a terminal UI built with
//! [ratatui](https://docs.rs/ratatui); a batch mode prints the same views to
//! stdout.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Input Parser → SortState → Stepper (step / run to completion) → Presenter → TUI
//! ```
//!
//! 1. [`input`]: splits comma/whitespace separated text into integers.
//! 2. [`stepper`]: the [`stepper::SortState`] state machine and the
//!    [`stepper::Stepper`] that advances it by exactly one comparison.
//! 3. [`presenter`]: read-only status, statistics and log views.
//! 4. [`snapshot`]: memory-limited history of earlier states for stepping
//!    backward.
//! 5. [`session`]: owns the optional current state and its history; the
//!    single entry point used by the front ends.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithm
//!
//! Standard optimized bubble sort: a pass compares adjacent pairs of the
//! unsorted prefix and swaps a pair when the left value is strictly greater.
//! A pass without any swap ends the sort early.

pub mod input;
pub mod presenter;
pub mod session;
pub mod snapshot;
pub mod stepper;
pub mod ui;
