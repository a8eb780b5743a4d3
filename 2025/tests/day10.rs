use aoc2025::day10::Machine;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day10-part1").unwrap();
    cmd.arg("samples/day10.txt");

    cmd.assert().success().stdout(str::diff("7\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day10-part2").unwrap();
    cmd.arg("samples/day10.txt");

    cmd.assert().success().stdout(str::diff("33\n"));
}

#[test]
fn single_machine_presses() {
    let machine =
        Machine::try_from("[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}").unwrap();

    assert_eq!(machine.min_light_presses(), Some(2));
    assert_eq!(machine.min_joltage_presses(), Some(10));
}

#[test]
fn unreachable_configuration() {
    let machine = Machine::try_from("[#.] (1) {1,1}").unwrap();

    assert_eq!(machine.min_light_presses(), None);
    assert_eq!(machine.min_joltage_presses(), None);
}

#[test]
fn malformed_machines_are_rejected() {
    assert!(Machine::try_from("[.#] (2) {1,1}").is_err());
    assert!(Machine::try_from("[.#] (1) {1}").is_err());
    assert!(Machine::try_from(".# (1) {1,1}").is_err());
}
