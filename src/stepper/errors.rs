//! Error types for the sort stepper
//!
//! The stepper itself cannot fail on valid input; the only error it reports is
//! [`StepperError::InvariantViolation`], which means the step logic is broken.
//! It is never swallowed: callers surface it to the user.

use std::fmt;

/// Errors raised while advancing a [`SortState`](super::SortState)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepperError {
    /// The state machine reached a condition its invariants rule out
    InvariantViolation {
        message: String,
        /// Steps recorded on the state when the violation was detected
        steps: usize,
    },
}

impl fmt::Display for StepperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepperError::InvariantViolation { message, steps } => {
                write!(
                    f,
                    "Internal invariant violated after {} step{}: {}",
                    steps,
                    if *steps == 1 { "" } else { "s" },
                    message
                )
            }
        }
    }
}

impl std::error::Error for StepperError {}
