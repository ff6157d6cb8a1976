// Stepping engine for bubble sort

use crate::stepper::errors::StepperError;
use crate::stepper::state::{LogEntry, SortState};
use log::{debug, error, trace};

/// A single comparison performed by [`Stepper::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Index of the left element of the compared pair
    pub left_index: usize,
    pub left: i64,
    pub right: i64,
    pub swapped: bool,
}

/// What a call to [`Stepper::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Compared a pair; the pass continues
    Compared(Comparison),

    /// Compared the last pair of a pass that had swaps; the next pass begins
    PassCompleted {
        comparison: Comparison,
        /// 1-based number of the pass that just ended
        pass: usize,
        /// Position now holding its final value
        settled: usize,
    },

    /// The sort is done. `comparison` is `None` when the safety check fired
    /// without comparing anything.
    Finished {
        comparison: Option<Comparison>,
        early: bool,
    },

    /// The state was already finished; nothing changed
    AlreadyFinished,
}

impl StepOutcome {
    pub fn comparison(&self) -> Option<Comparison> {
        match self {
            StepOutcome::Compared(comparison) => Some(*comparison),
            StepOutcome::PassCompleted { comparison, .. } => Some(*comparison),
            StepOutcome::Finished { comparison, .. } => *comparison,
            StepOutcome::AlreadyFinished => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            StepOutcome::Finished { .. } | StepOutcome::AlreadyFinished
        )
    }
}

/// Advances [`SortState`]s one comparison at a time.
///
/// The stepper holds configuration only, never a state; any number of
/// independent states can be driven by the same stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stepper {
    /// Fixed ceiling for [`Stepper::run_to_completion`]; `None` derives it
    /// from the array length
    max_steps: Option<usize>,
}

impl Stepper {
    pub fn new() -> Self {
        Stepper { max_steps: None }
    }

    /// Use a fixed run-to-completion ceiling instead of the analytic bound
    pub fn with_max_steps(max_steps: usize) -> Self {
        Stepper {
            max_steps: Some(max_steps),
        }
    }

    /// Step ceiling that applies to `state` in [`Stepper::run_to_completion`]
    pub fn ceiling_for(&self, state: &SortState) -> usize {
        self.max_steps.unwrap_or_else(|| state.step_bound())
    }

    /// Perform one comparison (and possible swap) on `state`.
    ///
    /// A finished state is left untouched. The only error is an invariant
    /// violation, in which case `state` is not modified.
    pub fn step(&self, state: &mut SortState) -> Result<StepOutcome, StepperError> {
        if state.finished {
            return Ok(StepOutcome::AlreadyFinished);
        }

        let n = state.n;

        // Safety check, unreachable through normal stepping
        if state.pass_index + 1 >= n {
            state.finished = true;
            state.log.push(LogEntry::AllPassesComplete {
                array: state.array.clone(),
            });
            debug!("safety check finished sort at pass {}", state.pass_index + 1);
            return Ok(StepOutcome::Finished {
                comparison: None,
                early: false,
            });
        }

        let j = state.cursor;
        let unsorted_len = n - state.pass_index;
        if j + 1 >= unsorted_len {
            return Err(StepperError::InvariantViolation {
                message: format!(
                    "cursor {} outside unsorted prefix of length {} in pass {}",
                    j,
                    unsorted_len,
                    state.pass_index + 1
                ),
                steps: state.step_count,
            });
        }
        let (left, right) = (state.array[j], state.array[j + 1]);

        state.step_count += 1;
        state.comparison_count += 1;

        let swapped = left > right;
        if swapped {
            state.array.swap(j, j + 1);
            state.swap_count += 1;
            state.swapped_in_pass = true;
        }
        state.log.push(LogEntry::Compared {
            step: state.step_count,
            left,
            right,
            swapped,
            array: state.array.clone(),
        });
        trace!(
            "step {}: compared {} and {} at {}, swapped: {}",
            state.step_count,
            left,
            right,
            j,
            swapped
        );

        let comparison = Comparison {
            left_index: j,
            left,
            right,
            swapped,
        };

        state.cursor += 1;
        if state.cursor < unsorted_len - 1 {
            return Ok(StepOutcome::Compared(comparison));
        }

        // End of pass
        let pass = state.pass_index + 1;
        if !state.swapped_in_pass {
            state.finished = true;
            state.log.push(LogEntry::SortedEarly {
                pass,
                array: state.array.clone(),
            });
            debug!(
                "no swaps in pass {}, sorted early after {} comparisons",
                pass, state.comparison_count
            );
            return Ok(StepOutcome::Finished {
                comparison: Some(comparison),
                early: true,
            });
        }

        let settled = unsorted_len - 1;
        state.log.push(LogEntry::PassComplete { pass, settled });
        state.pass_index += 1;
        state.cursor = 0;
        state.swapped_in_pass = false;
        debug!("pass {} complete, position {} settled", pass, settled);

        if state.pass_index + 1 >= n {
            state.finished = true;
            state.log.push(LogEntry::AllPassesComplete {
                array: state.array.clone(),
            });
            debug!(
                "all passes complete after {} comparisons",
                state.comparison_count
            );
            return Ok(StepOutcome::Finished {
                comparison: Some(comparison),
                early: false,
            });
        }

        Ok(StepOutcome::PassCompleted {
            comparison,
            pass,
            settled,
        })
    }

    /// Step `state` until it is finished and return the number of steps taken.
    ///
    /// Running past the ceiling is reported as an invariant violation; the
    /// state keeps whatever progress was made.
    pub fn run_to_completion(&self, state: &mut SortState) -> Result<usize, StepperError> {
        let ceiling = self.ceiling_for(state);
        let mut taken = 0;

        while !state.finished {
            if taken >= ceiling {
                error!(
                    "run to completion hit its ceiling of {} steps on {} elements",
                    ceiling, state.n
                );
                return Err(StepperError::InvariantViolation {
                    message: format!("sort not finished within {} steps", ceiling),
                    steps: state.step_count,
                });
            }
            self.step(state)?;
            taken += 1;
        }

        Ok(taken)
    }
}
