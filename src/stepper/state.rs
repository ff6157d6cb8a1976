//! Sort progress state
//!
//! [`SortState`] is the only entity the stepper works on. It owns the array
//! being sorted exclusively; readers borrow it as a slice or copy it with
//! [`SortState::array_snapshot`]. Every field is private so that the only way
//! to mutate a state is [`Stepper::step`](super::Stepper::step).

use std::fmt;
use std::mem;

/// One entry in the chronological event log of a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// Created from a single value, nothing to do
    AlreadySorted,

    /// Created from two or more values
    Initial { array: Vec<i64> },

    /// A comparison of the pair under the cursor
    Compared {
        step: usize,
        left: i64,
        right: i64,
        swapped: bool,
        /// Array after the (optional) swap
        array: Vec<i64>,
    },

    /// A pass finished without swaps, so the sort ended early
    SortedEarly { pass: usize, array: Vec<i64> },

    /// A pass finished with at least one swap; `settled` is now in place
    PassComplete { pass: usize, settled: usize },

    /// The last pass was exhausted
    AllPassesComplete { array: Vec<i64> },
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::AlreadySorted => {
                write!(f, "List has only one element. Already sorted.")
            }
            LogEntry::Initial { array } => write!(f, "Initial list: {:?}", array),
            LogEntry::Compared {
                step,
                left,
                right,
                swapped: true,
                array,
            } => {
                write!(
                    f,
                    "Step {}: Compared {} and {} → swapped. New list: {:?}",
                    step, left, right, array
                )
            }
            LogEntry::Compared {
                step,
                left,
                right,
                swapped: false,
                array,
            } => {
                write!(
                    f,
                    "Step {}: Compared {} and {} → no swap. List stays: {:?}",
                    step, left, right, array
                )
            }
            LogEntry::SortedEarly { pass, array } => {
                write!(
                    f,
                    "No swaps in pass {}. List is sorted early: {:?}",
                    pass, array
                )
            }
            LogEntry::PassComplete { pass, settled } => {
                write!(
                    f,
                    "End of pass {}. Largest element has bubbled to position {}.",
                    pass, settled
                )
            }
            LogEntry::AllPassesComplete { array } => {
                write!(f, "All passes complete. Final sorted list: {:?}", array)
            }
        }
    }
}

/// Progress of one bubble sort over an owned array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub(super) array: Vec<i64>,
    pub(super) n: usize,
    /// Current outer pass (i)
    pub(super) pass_index: usize,
    /// Left index of the next pair to compare (j)
    pub(super) cursor: usize,
    pub(super) step_count: usize,
    pub(super) comparison_count: usize,
    pub(super) swap_count: usize,
    pub(super) swapped_in_pass: bool,
    pub(super) finished: bool,
    pub(super) log: Vec<LogEntry>,
}

impl SortState {
    /// Create a state ready to sort `values`.
    ///
    /// A single value (or, defensively, no value at all) produces a state
    /// that is already finished. Input validation belongs to
    /// [`crate::input`]; this constructor never fails.
    pub fn new(values: Vec<i64>) -> Self {
        let n = values.len();
        let (finished, first_entry) = if n <= 1 {
            (true, LogEntry::AlreadySorted)
        } else {
            (
                false,
                LogEntry::Initial {
                    array: values.clone(),
                },
            )
        };

        SortState {
            array: values,
            n,
            pass_index: 0,
            cursor: 0,
            step_count: 0,
            comparison_count: 0,
            swap_count: 0,
            swapped_in_pass: false,
            finished,
            log: vec![first_entry],
        }
    }

    // ========== Read accessors ==========

    /// The live array, borrowed
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// An owned copy of the array, safe to keep across further steps
    pub fn array_snapshot(&self) -> Vec<i64> {
        self.array.clone()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn pass_index(&self) -> usize {
        self.pass_index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn comparison_count(&self) -> usize {
        self.comparison_count
    }

    pub fn swap_count(&self) -> usize {
        self.swap_count
    }

    pub fn swapped_in_pass(&self) -> bool {
        self.swapped_in_pass
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Number of positions at the end of the array already in final place
    pub fn settled_count(&self) -> usize {
        if self.finished {
            self.n
        } else {
            self.pass_index
        }
    }

    /// Upper bound on the number of steps a full sort of this state can take
    pub fn step_bound(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2 + self.n
    }

    /// Estimate the memory usage of this state in bytes
    pub fn estimated_size(&self) -> usize {
        // Compared entries each carry a copy of the array
        let array_bytes = self.n * mem::size_of::<i64>();
        let log_bytes = self.log.len() * (mem::size_of::<LogEntry>() + array_bytes);

        mem::size_of::<Self>() + array_bytes + log_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_single_value_is_finished() {
        let state = SortState::new(vec![7]);

        assert!(state.is_finished());
        assert_eq!(state.comparison_count(), 0);
        assert_eq!(state.array(), &[7]);
        assert_eq!(state.log(), &[LogEntry::AlreadySorted]);
    }

    #[test]
    fn test_new_multiple_values_starts_at_first_pair() {
        let state = SortState::new(vec![3, 1, 2]);

        assert!(!state.is_finished());
        assert_eq!(state.len(), 3);
        assert_eq!(state.pass_index(), 0);
        assert_eq!(state.cursor(), 0);
        assert_eq!(
            state.log(),
            &[LogEntry::Initial {
                array: vec![3, 1, 2]
            }]
        );
    }

    #[test]
    fn test_log_entry_wording() {
        let swapped = LogEntry::Compared {
            step: 1,
            left: 3,
            right: 1,
            swapped: true,
            array: vec![1, 3, 2],
        };
        assert_eq!(
            swapped.to_string(),
            "Step 1: Compared 3 and 1 → swapped. New list: [1, 3, 2]"
        );

        let kept = LogEntry::Compared {
            step: 3,
            left: 1,
            right: 2,
            swapped: false,
            array: vec![1, 2, 3],
        };
        assert_eq!(
            kept.to_string(),
            "Step 3: Compared 1 and 2 → no swap. List stays: [1, 2, 3]"
        );

        assert_eq!(
            LogEntry::PassComplete { pass: 1, settled: 2 }.to_string(),
            "End of pass 1. Largest element has bubbled to position 2."
        );
        assert_eq!(
            LogEntry::SortedEarly {
                pass: 2,
                array: vec![1, 2, 3]
            }
            .to_string(),
            "No swaps in pass 2. List is sorted early: [1, 2, 3]"
        );
    }

    #[test]
    fn test_step_bound() {
        assert_eq!(SortState::new(vec![1]).step_bound(), 1);
        assert_eq!(SortState::new(vec![4, 3, 2, 1]).step_bound(), 10);
    }
}
