// Snapshot history for stepping backward

use crate::stepper::SortState;
use std::fmt;

/// Errors from the snapshot history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Pushing the snapshot would exceed the byte budget
    LimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::LimitExceeded {
                current,
                requested,
                limit,
            } => write!(
                f,
                "Snapshot memory limit exceeded: {} + {} > {}",
                current, requested, limit
            ),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Stack of earlier states with a memory limit
#[derive(Debug)]
pub struct History {
    snapshots: Vec<SortState>,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(max_memory: usize) -> Self {
        History {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: SortState) -> Result<(), HistoryError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(HistoryError::LimitExceeded {
                current: self.current_memory,
                requested: snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<SortState> {
        let snapshot = self.snapshots.pop()?;
        self.current_memory -= snapshot.estimated_size();
        Some(snapshot)
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_tracks_memory() {
        let mut history = History::new(1024 * 1024);
        let state = SortState::new(vec![3, 2, 1]);
        let size = state.estimated_size();

        history.push(state.clone()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.memory_usage(), size);

        assert_eq!(history.pop(), Some(state));
        assert!(history.is_empty());
        assert_eq!(history.memory_usage(), 0);
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_limit_rejects_snapshot() {
        let state = SortState::new(vec![3, 2, 1]);
        let mut history = History::new(state.estimated_size());

        history.push(state.clone()).unwrap();
        let err = history.push(state).unwrap_err();
        assert!(matches!(err, HistoryError::LimitExceeded { .. }));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_resets_usage() {
        let mut history = History::new(1024 * 1024);
        history.push(SortState::new(vec![1, 2])).unwrap();
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.memory_usage(), 0);
    }
}
