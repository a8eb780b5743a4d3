use aoc2025::day1::{Dial, Rotation};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day1-part1").unwrap();
    cmd.arg("samples/day1.txt");

    cmd.assert().success().stdout(str::diff("3\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day1-part2").unwrap();
    cmd.arg("samples/day1.txt");

    cmd.assert().success().stdout(str::diff("6\n"));
}

#[test]
fn full_turns_pass_zero_each_time() {
    let mut dial = Dial::new();

    assert_eq!(dial.rotate(Rotation::Right(1000)), 10);
    assert_eq!(dial.value(), 50);
}

#[test]
fn leaving_zero_leftwards_is_not_counted() {
    let mut dial = Dial::new();
    assert_eq!(dial.rotate(Rotation::Left(50)), 1);
    assert_eq!(dial.value(), 0);

    assert_eq!(dial.rotate(Rotation::Left(5)), 0);
    assert_eq!(dial.value(), 95);

    assert_eq!(dial.rotate(Rotation::Left(195)), 2);
    assert_eq!(dial.value(), 0);
}

#[test]
fn malformed_rotation_is_rejected() {
    assert!(Rotation::try_from("X10").is_err());
    assert!(Rotation::try_from("L").is_err());
    assert!(Rotation::try_from("").is_err());
}

#[test]
fn largest_turns_count_without_overflow() {
    let mut dial = Dial::new();
    assert_eq!(dial.rotate(Rotation::try_from("R4294967295").unwrap()), 42_949_673);
    assert_eq!(dial.value(), 45);

    let mut dial = Dial::new();
    assert_eq!(dial.rotate(Rotation::try_from("L4294967295").unwrap()), 42_949_673);
    assert_eq!(dial.value(), 55);
}
