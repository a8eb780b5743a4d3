use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day17-part1").unwrap();
    cmd.arg("samples/day17_1.txt");

    cmd.assert().success().stdout(str::diff("102\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day17-part2").unwrap();
    cmd.arg("samples/day17_1.txt");

    cmd.assert().success().stdout(str::diff("94\n"));
}

#[test]
fn part2_must_move_four_before_stopping() {
    let mut cmd = Command::cargo_bin("aoc2023-day17-part2").unwrap();
    cmd.arg("samples/day17_2.txt");

    cmd.assert().success().stdout(str::diff("71\n"));
}

#[test]
fn invalid_digit_fails() {
    let mut cmd = Command::cargo_bin("aoc2023-day17-part1").unwrap();
    cmd.arg("samples/day3.txt");

    cmd.assert().failure().stderr(str::contains("Invalid character"));
}
