use aoc2023::day9::History;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day9-part1").unwrap();
    cmd.arg("samples/day9.txt");

    cmd.assert().success().stdout(str::diff("114\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day9-part2").unwrap();
    cmd.arg("samples/day9.txt");

    cmd.assert().success().stdout(str::diff("2\n"));
}

#[test]
fn extrapolates_both_ends() {
    let history = History::try_from("10 13 16 21 30 45").unwrap();

    assert_eq!(history.next_value(), 68);
    assert_eq!(history.prev_value(), 5);
}

#[test]
fn negative_values_are_accepted() {
    let history = History::try_from("-3 -1 1").unwrap();

    assert_eq!(history.next_value(), 3);
    assert_eq!(history.prev_value(), -5);
}

#[test]
fn non_number_is_rejected() {
    assert!(History::try_from("1 two 3").is_err());
    assert!(History::try_from("   ").is_err());
}
