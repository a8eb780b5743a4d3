use aoc2023::day3;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day3-part1").unwrap();
    cmd.arg("samples/day3.txt");

    cmd.assert().success().stdout(str::diff("4361\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day3-part2").unwrap();
    cmd.arg("samples/day3.txt");

    cmd.assert().success().stdout(str::diff("467835\n"));
}

#[test]
fn number_runs_are_split_on_non_digits() {
    let schematic = day3::read_schematic("samples/day3.txt").unwrap();
    let values = schematic
        .numbers()
        .iter()
        .map(|n| n.value())
        .collect::<Vec<_>>();

    assert_eq!(values.len(), 10);
    assert_eq!(values[..2], [467, 114]);
    assert_eq!(values[values.len() - 2..], [664, 598]);
}

#[test]
fn missing_input_fails() {
    let mut cmd = Command::cargo_bin("aoc2023-day3-part1").unwrap();
    cmd.arg("samples/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
