use aoc2025::day6::{Reading, Worksheet};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day6-part1").unwrap();
    cmd.arg("samples/day6.txt");

    cmd.assert().success().stdout(str::diff("4277556\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day6-part2").unwrap();
    cmd.arg("samples/day6.txt");

    cmd.assert().success().stdout(str::diff("3263827\n"));
}

fn worksheet(lines: &[&str]) -> Worksheet {
    let lines = lines.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Worksheet::new(&lines).unwrap()
}

#[test]
fn short_lines_are_padded() {
    let sheet = worksheet(&["12 3", " 4 5", "+  *"]);

    assert_eq!(sheet.problem_n(), 2);
    assert_eq!(sheet.grand_total(Reading::Rows).unwrap(), 16 + 15);
    assert_eq!(sheet.grand_total(Reading::Columns).unwrap(), 1 + 24 + 35);
}

#[test]
fn unknown_operator_is_rejected() {
    let lines = ["1 2", "- +"].map(String::from);

    assert!(Worksheet::new(&lines).is_err());
}
