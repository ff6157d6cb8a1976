//! A sorting session: the optional current state plus its undo history
//!
//! [`Session`] is what the front ends talk to. It owns at most one
//! [`SortState`] (none before the first successful [`Session::start`]),
//! turns "no state yet" into the recoverable [`SessionError::MissingState`],
//! and snapshots the state before each change so the user can step back.

use crate::input::{parse_values, ValidationError};
use crate::presenter::Report;
use crate::snapshot::History;
use crate::stepper::constants::DEFAULT_HISTORY_LIMIT;
use crate::stepper::{SortState, StepOutcome, Stepper, StepperError};
use log::{info, warn};
use std::fmt;

/// Runtime knobs for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed run-to-end ceiling; `None` uses the analytic bound
    pub max_steps: Option<usize>,
    /// Byte budget of the undo history
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_steps: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Errors from session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Stepping was requested before any list was started
    MissingState,

    /// Already at the first recorded state
    NothingToUndo,

    /// The stepper detected a broken invariant
    Stepper(StepperError),
}

impl SessionError {
    /// Whether the user can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::Stepper(_))
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MissingState => {
                write!(f, "Nothing to sort yet. Enter some numbers and start first.")
            }
            SessionError::NothingToUndo => write!(f, "Already at the initial list."),
            SessionError::Stepper(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StepperError> for SessionError {
    fn from(e: StepperError) -> Self {
        SessionError::Stepper(e)
    }
}

/// One user's sorting session
#[derive(Debug)]
pub struct Session {
    state: Option<SortState>,
    history: History,
    stepper: Stepper,
    /// Set once the history budget is exhausted for the current list
    history_full: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let stepper = match config.max_steps {
            Some(max_steps) => Stepper::with_max_steps(max_steps),
            None => Stepper::new(),
        };

        Session {
            state: None,
            history: History::new(config.history_limit),
            stepper,
            history_full: false,
        }
    }

    /// Parse `text` and start sorting it, replacing any current state.
    ///
    /// On a validation error the current state is kept as it was.
    pub fn start(&mut self, text: &str) -> Result<(), ValidationError> {
        let values = parse_values(text)?;
        info!("starting sort of {} values", values.len());

        self.state = Some(SortState::new(values));
        self.history.clear();
        self.history_full = false;
        Ok(())
    }

    /// Discard the current state, back to "nothing started"
    pub fn clear(&mut self) {
        self.state = None;
        self.history.clear();
        self.history_full = false;
    }

    /// Perform one comparison
    pub fn next_step(&mut self) -> Result<StepOutcome, SessionError> {
        let state = self.state.as_ref().ok_or(SessionError::MissingState)?;
        if state.is_finished() {
            return Ok(StepOutcome::AlreadyFinished);
        }

        let snapshot = state.clone();
        let recorded = self.record(snapshot);
        let state = self.state.as_mut().ok_or(SessionError::MissingState)?;
        match self.stepper.step(state) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // Nothing changed, so the snapshot is a duplicate
                if recorded {
                    self.history.pop();
                }
                Err(e.into())
            }
        }
    }

    /// Perform up to `count` comparisons, stopping once sorted.
    ///
    /// Returns how many comparisons were made.
    pub fn advance(&mut self, count: usize) -> Result<usize, SessionError> {
        let before = self.comparisons()?;
        for _ in 0..count {
            if self.next_step()?.is_finished() {
                break;
            }
        }
        Ok(self.comparisons()? - before)
    }

    /// Step until sorted, returning the number of steps taken
    pub fn run_to_end(&mut self) -> Result<usize, SessionError> {
        let state = self.state.as_ref().ok_or(SessionError::MissingState)?;
        if state.is_finished() {
            return Ok(0);
        }

        let snapshot = state.clone();
        self.record(snapshot);
        let state = self.state.as_mut().ok_or(SessionError::MissingState)?;
        let taken = self.stepper.run_to_completion(state)?;
        info!("ran to end in {} steps", taken);
        Ok(taken)
    }

    /// Restore the state as it was before the last step or run
    pub fn step_back(&mut self) -> Result<(), SessionError> {
        if self.state.is_none() {
            return Err(SessionError::MissingState);
        }
        let previous = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        self.state = Some(previous);
        self.history_full = false;
        Ok(())
    }

    /// Push `snapshot` to the undo history; false when it was not kept
    fn record(&mut self, snapshot: SortState) -> bool {
        if self.history_full {
            return false;
        }
        match self.history.push(snapshot) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}; stepping back is no longer recorded", e);
                self.history_full = true;
                false
            }
        }
    }

    fn comparisons(&self) -> Result<usize, SessionError> {
        self.state
            .as_ref()
            .map(SortState::comparison_count)
            .ok_or(SessionError::MissingState)
    }

    // ========== Getter methods for UI ==========

    pub fn state(&self) -> Option<&SortState> {
        self.state.as_ref()
    }

    pub fn report(&self) -> Option<Report> {
        self.state.as_ref().map(Report::from_state)
    }

    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.state.as_ref().is_some_and(SortState::is_finished)
    }

    /// Number of states that [`Session::step_back`] can restore
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn history_usage(&self) -> (usize, usize) {
        (self.history.memory_usage(), self.history.memory_limit())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn started(text: &str) -> Session {
        let mut session = Session::default();
        session.start(text).expect("start failed");
        session
    }

    #[test]
    fn test_stepping_before_start_is_missing_state() {
        let mut session = Session::default();

        assert_eq!(session.next_step(), Err(SessionError::MissingState));
        assert_eq!(session.run_to_end(), Err(SessionError::MissingState));
        assert_eq!(session.step_back(), Err(SessionError::MissingState));
        assert!(session.report().is_none());
        assert!(SessionError::MissingState.is_recoverable());
        assert_eq!(
            SessionError::MissingState.to_string(),
            "Nothing to sort yet. Enter some numbers and start first."
        );
    }

    #[test]
    fn test_invalid_start_keeps_previous_state() {
        let mut session = started("3 1 2");
        session.next_step().unwrap();

        let err = session.start("3, x").unwrap_err();
        assert_eq!(err, ValidationError::InvalidToken("x".to_string()));
        let state = session.state().unwrap();
        assert_eq!(state.array(), &[1, 3, 2]);
        assert_eq!(state.comparison_count(), 1);
    }

    #[test]
    fn test_step_back_restores_previous_state() {
        let mut session = started("3, 1, 2");
        session.next_step().unwrap();
        session.next_step().unwrap();
        assert_eq!(session.undo_depth(), 2);

        session.step_back().unwrap();
        let state = session.state().unwrap();
        assert_eq!(state.array(), &[1, 3, 2]);
        assert_eq!(state.comparison_count(), 1);
        assert_eq!(state.log().len(), 2);

        session.step_back().unwrap();
        assert_eq!(session.state().unwrap().array(), &[3, 1, 2]);
        assert_eq!(session.step_back(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn test_run_to_end_is_one_undo() {
        let mut session = started("5 4 3 2 1");
        let taken = session.run_to_end().unwrap();

        assert_eq!(taken, 10);
        assert!(session.is_finished());
        assert_eq!(session.run_to_end(), Ok(0));

        session.step_back().unwrap();
        assert_eq!(session.state().unwrap().comparison_count(), 0);
    }

    #[test]
    fn test_finished_steps_are_not_recorded() {
        let mut session = started("7");

        assert_eq!(session.next_step(), Ok(StepOutcome::AlreadyFinished));
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_advance_stops_when_sorted() {
        let mut session = started("3 1 2");

        assert_eq!(session.advance(2), Ok(2));
        assert_eq!(session.advance(9), Ok(1));
        assert!(session.is_finished());
        assert_eq!(session.advance(9), Ok(0));
    }

    #[test]
    fn test_restart_clears_history() {
        let mut session = started("2 1");
        session.next_step().unwrap();
        session.start("4 3").unwrap();

        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.history_usage().0, 0);
        assert_eq!(session.state().unwrap().array(), &[4, 3]);
    }

    #[test]
    fn test_full_history_keeps_sorting() {
        let mut session = Session::new(SessionConfig {
            max_steps: None,
            history_limit: 1,
        });
        session.start("4 3 2 1").unwrap();

        assert_eq!(session.run_to_end(), Ok(6));
        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.step_back(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn test_ceiling_error_is_not_recoverable() {
        let mut session = Session::new(SessionConfig {
            max_steps: Some(2),
            history_limit: DEFAULT_HISTORY_LIMIT,
        });
        session.start("4 3 2 1").unwrap();

        let err = session.run_to_end().unwrap_err();
        assert!(matches!(err, SessionError::Stepper(_)));
        assert!(!err.is_recoverable());
        assert_eq!(session.state().unwrap().comparison_count(), 2);
    }

    #[test]
    fn test_clear_returns_to_not_started() {
        let mut session = started("2 1");
        session.clear();

        assert!(!session.is_started());
        assert_eq!(session.next_step(), Err(SessionError::MissingState));
    }
}
