// Integration tests for the sorting session and presenter

use bubbletty::input::ValidationError;
use bubbletty::presenter::{self, Report, Status};
use bubbletty::session::{Session, SessionError};
use bubbletty::stepper::{SortState, Stepper};
use pretty_assertions::assert_eq;

#[test]
fn test_session_walkthrough_matches_views() {
    let mut session = Session::default();
    session.start("3, 1, 2").expect("start failed");

    let report = session.report().expect("no report");
    assert_eq!(
        report.current_view(),
        "Current list: [3, 1, 2]\n(Status: In progress — Pass 1, next comparison: indices 0 and 1)"
    );

    session.next_step().unwrap();
    session.next_step().unwrap();
    let report = session.report().unwrap();
    assert_eq!(report.array, vec![1, 2, 3]);
    assert_eq!(
        report.status,
        Status::InProgress {
            pass: 2,
            left: 0,
            right: 1
        }
    );
    assert_eq!(report.settled, 1);

    session.next_step().unwrap();
    let report = session.report().unwrap();
    assert_eq!(report.current_view(), "Current list: [1, 2, 3]\n(Status: Sorted)");
    assert_eq!(report.stats_line(), "Steps: 3 | Comparisons: 3 | Swaps: 2");
    assert_eq!(
        report.log_text(),
        [
            "Initial list: [3, 1, 2]",
            "Step 1: Compared 3 and 1 → swapped. New list: [1, 3, 2]",
            "Step 2: Compared 3 and 2 → swapped. New list: [1, 2, 3]",
            "End of pass 1. Largest element has bubbled to position 2.",
            "Step 3: Compared 1 and 2 → no swap. List stays: [1, 2, 3]",
            "No swaps in pass 2. List is sorted early: [1, 2, 3]",
        ]
        .join("\n")
    );
}

#[test]
fn test_default_example_runs_to_end() {
    let mut session = Session::default();
    session.start("45, 12, 88, 5, 60, 22, 75, 30").unwrap();
    session.run_to_end().unwrap();

    let report = session.report().unwrap();
    assert_eq!(report.array, vec![5, 12, 22, 30, 45, 60, 75, 88]);
    assert_eq!(report.status, Status::Sorted);
    assert!(report.counters.swaps <= report.counters.comparisons);
    assert!(report.counters.comparisons <= 8 * 7 / 2);
}

#[test]
fn test_validation_errors_surface_before_any_state() {
    let mut session = Session::default();

    assert_eq!(session.start("  ,  "), Err(ValidationError::Empty));
    assert_eq!(
        session.start("1 2 three"),
        Err(ValidationError::InvalidToken("three".to_string()))
    );
    assert!(!session.is_started());
    assert_eq!(session.next_step(), Err(SessionError::MissingState));
}

#[test]
fn test_single_element_session() {
    let mut session = Session::default();
    session.start("7").unwrap();

    assert!(session.is_finished());
    let report = session.report().unwrap();
    assert_eq!(report.counters.comparisons, 0);
    assert_eq!(report.array, vec![7]);
    assert_eq!(
        report.log,
        vec!["List has only one element. Already sorted.".to_string()]
    );
}

#[test]
fn test_worst_case_comparison_count() {
    for n in 2..=12i64 {
        let mut state = SortState::new((1..=n).rev().collect());
        Stepper::new().run_to_completion(&mut state).unwrap();

        let n = n as usize;
        assert_eq!(state.comparison_count(), n * (n - 1) / 2);
        assert_eq!(state.swap_count(), n * (n - 1) / 2);
    }
}

#[test]
fn test_independent_sessions_do_not_interfere() {
    let mut first = Session::default();
    let mut second = Session::default();
    first.start("2 1").unwrap();
    second.start("9 8 7").unwrap();

    first.run_to_end().unwrap();

    assert_eq!(first.state().unwrap().array(), &[1, 2]);
    assert_eq!(second.state().unwrap().array(), &[9, 8, 7]);
    assert_eq!(second.state().unwrap().comparison_count(), 0);
}

#[test]
fn test_free_presenter_functions_agree_with_report() {
    let stepper = Stepper::new();
    let mut state = SortState::new(vec![2, 2, 1]);
    stepper.step(&mut state).unwrap();
    let report = Report::from_state(&state);

    assert_eq!(presenter::current_view(&state), report.current_view());
    assert_eq!(presenter::stats_line(&state), "Steps: 1 | Comparisons: 1 | Swaps: 0");
    assert_eq!(
        presenter::log_text(&state),
        "Initial list: [2, 2, 1]\nStep 1: Compared 2 and 2 → no swap. List stays: [2, 2, 1]"
    );
}
