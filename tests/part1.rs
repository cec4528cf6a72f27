use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("after cutting 3 wire(s) is 54."))
        .stderr(str::is_empty());
}

#[test]
fn part1_warns_when_cut_is_not_three_wires() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/disconnected.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("after cutting 0 wire(s) is 6."))
        .stderr(str::contains("but the minimum cut has 0"));
}

#[test]
fn part1_fails_on_malformed_line() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/malformed.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to parse line 2"))
        .stderr(str::contains("Invalid text(rsh frs pzl lsr) for wiring"));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
