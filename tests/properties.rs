// Property tests for the sort stepper

use bubbletty::stepper::{SortState, StepOutcome, Stepper};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn inversions(values: &[i64]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}

#[quickcheck]
fn prop_run_to_completion_sorts(values: Vec<i64>) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let mut state = SortState::new(values.clone());
    let taken = Stepper::new().run_to_completion(&mut state).unwrap();

    let mut expected = values;
    expected.sort();
    TestResult::from_bool(
        state.array() == expected.as_slice()
            && state.is_finished()
            && taken == state.comparison_count(),
    )
}

#[quickcheck]
fn prop_swaps_equal_inversions(values: Vec<i64>) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let expected_swaps = inversions(&values);
    let mut state = SortState::new(values);
    Stepper::new().run_to_completion(&mut state).unwrap();

    TestResult::from_bool(
        state.swap_count() == expected_swaps && state.swap_count() <= state.comparison_count(),
    )
}

#[quickcheck]
fn prop_each_step_respects_invariants(values: Vec<i64>) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let stepper = Stepper::new();
    let n = values.len();
    let mut state = SortState::new(values);

    while !state.is_finished() {
        let before = state.clone();
        let outcome = stepper.step(&mut state).unwrap();

        let comparisons_ok = state.comparison_count() == before.comparison_count() + 1;
        let swaps_delta = state.swap_count() - before.swap_count();
        let swaps_ok = swaps_delta <= 1
            && (swaps_delta == 1) == outcome.comparison().is_some_and(|c| c.swapped);
        let cursor_ok = if state.pass_index() > before.pass_index() {
            state.pass_index() == before.pass_index() + 1 && state.cursor() == 0
        } else {
            state.pass_index() == before.pass_index()
                && state.cursor() == before.cursor() + 1
        };
        let bounds_ok =
            state.pass_index() <= n - 1 && state.cursor() <= n - 1 - state.pass_index();

        if !(comparisons_ok
            && swaps_ok
            && cursor_ok
            && bounds_ok
            && state.len() == n
            && state.log().len() > before.log().len())
        {
            return TestResult::failed();
        }
    }

    TestResult::passed()
}

#[quickcheck]
fn prop_finished_state_is_frozen(values: Vec<i64>) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let stepper = Stepper::new();
    let mut state = SortState::new(values);
    stepper.run_to_completion(&mut state).unwrap();
    let before = state.clone();

    let outcome = stepper.step(&mut state).unwrap();
    TestResult::from_bool(outcome == StepOutcome::AlreadyFinished && state == before)
}

#[quickcheck]
fn prop_sorted_input_takes_one_pass(values: Vec<i64>) -> TestResult {
    if values.len() < 2 {
        return TestResult::discard();
    }
    let mut sorted = values;
    sorted.sort();
    let n = sorted.len();
    let mut state = SortState::new(sorted);
    Stepper::new().run_to_completion(&mut state).unwrap();

    TestResult::from_bool(state.comparison_count() == n - 1 && state.swap_count() == 0)
}
