use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn batch_prints_sorted_list() {
    let mut cmd = Command::cargo_bin("bubbletty").unwrap();
    cmd.args(["--batch", "3, 1, 2"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Current list: [1, 2, 3]\n(Status: Sorted)"))
        .stdout(str::contains("Steps: 3 | Comparisons: 3 | Swaps: 2"))
        .stdout(str::contains("No swaps in pass 2. List is sorted early: [1, 2, 3]"));
}

#[test]
fn batch_accepts_separate_values() {
    let mut cmd = Command::cargo_bin("bubbletty").unwrap();
    cmd.args(["--batch", "5", "-4", "0"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Current list: [-4, 0, 5]"));
}

#[test]
fn batch_steps_stops_part_way() {
    let mut cmd = Command::cargo_bin("bubbletty").unwrap();
    cmd.args(["--batch", "--steps", "1", "3 1 2"]);

    cmd.assert().success().stdout(str::contains(
        "(Status: In progress — Pass 1, next comparison: indices 1 and 2)",
    ));
}

#[test]
fn batch_rejects_bad_token() {
    let mut cmd = Command::cargo_bin("bubbletty").unwrap();
    cmd.args(["--batch", "1, two"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Error: 'two' is not a valid integer."));
}

#[test]
fn batch_reports_ceiling_violation() {
    let mut cmd = Command::cargo_bin("bubbletty").unwrap();
    cmd.args(["--batch", "--max-steps", "2", "4 3 2 1"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Internal invariant violated"));
}
