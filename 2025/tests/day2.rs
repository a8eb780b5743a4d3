use aoc2025::day2::{self, Repetition};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day2-part1").unwrap();
    cmd.arg("samples/day2.txt");

    cmd.assert().success().stdout(str::diff("1227775554\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day2-part2").unwrap();
    cmd.arg("samples/day2.txt");

    cmd.assert().success().stdout(str::diff("4174379265\n"));
}

#[test]
fn repeated_blocks() {
    assert!(Repetition::Twice.matches(6464));
    assert!(Repetition::Twice.matches(123123));
    assert!(!Repetition::Twice.matches(111));
    assert!(!Repetition::Twice.matches(101));

    assert!(Repetition::AtLeastTwice.matches(111));
    assert!(Repetition::AtLeastTwice.matches(12121212));
    assert!(!Repetition::AtLeastTwice.matches(7));
    assert!(!Repetition::AtLeastTwice.matches(1231));
}

#[test]
fn ranges_are_inclusive() {
    assert_eq!(day2::invalid_id_sum(&[11..=22], Repetition::Twice), 33);
}
