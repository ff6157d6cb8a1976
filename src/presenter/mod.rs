//! Read-only views of a [`SortState`] for display
//!
//! Nothing here mutates a state. [`Report`] copies everything it needs, so a
//! report stays valid after the state it came from keeps stepping.

use crate::stepper::SortState;
use std::fmt;

/// Where a sort currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Sorted,
    InProgress {
        /// 1-based pass number
        pass: usize,
        /// Indices of the pair compared by the next step
        left: usize,
        right: usize,
    },
}

impl Status {
    pub fn of(state: &SortState) -> Self {
        if state.is_finished() {
            Status::Sorted
        } else {
            Status::InProgress {
                pass: state.pass_index() + 1,
                left: state.cursor(),
                right: state.cursor() + 1,
            }
        }
    }

    /// Pair of indices the next step compares, if any
    pub fn next_pair(&self) -> Option<(usize, usize)> {
        match self {
            Status::Sorted => None,
            Status::InProgress { left, right, .. } => Some((*left, *right)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Sorted => write!(f, "(Status: Sorted)"),
            Status::InProgress { pass, left, right } => write!(
                f,
                "(Status: In progress — Pass {}, next comparison: indices {} and {})",
                pass, left, right
            ),
        }
    }
}

/// Step, comparison and swap counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

impl Counters {
    pub fn of(state: &SortState) -> Self {
        Counters {
            steps: state.step_count(),
            comparisons: state.comparison_count(),
            swaps: state.swap_count(),
        }
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Steps: {} | Comparisons: {} | Swaps: {}",
            self.steps, self.comparisons, self.swaps
        )
    }
}

/// The four views the front ends render after every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub array: Vec<i64>,
    pub status: Status,
    pub counters: Counters,
    pub log: Vec<String>,
    /// Positions at the end of the array already in final place
    pub settled: usize,
}

impl Report {
    pub fn from_state(state: &SortState) -> Self {
        Report {
            array: state.array_snapshot(),
            status: Status::of(state),
            counters: Counters::of(state),
            log: state.log().iter().map(|entry| entry.to_string()).collect(),
            settled: state.settled_count(),
        }
    }

    pub fn current_view(&self) -> String {
        format!("Current list: {:?}\n{}", self.array, self.status)
    }

    pub fn stats_line(&self) -> String {
        self.counters.to_string()
    }

    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

/// Current array plus status line
pub fn current_view(state: &SortState) -> String {
    format!("Current list: {:?}\n{}", state.array(), Status::of(state))
}

/// `Steps: S | Comparisons: C | Swaps: W`
pub fn stats_line(state: &SortState) -> String {
    Counters::of(state).to_string()
}

/// Every log entry on its own line, oldest first
pub fn log_text(state: &SortState) -> String {
    state
        .log()
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
