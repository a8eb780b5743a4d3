use aoc2025::day3::Bank;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day3-part1").unwrap();
    cmd.arg("samples/day3.txt");

    cmd.assert().success().stdout(str::diff("357\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day3-part2").unwrap();
    cmd.arg("samples/day3.txt");

    cmd.assert().success().stdout(str::diff("3121910778619\n"));
}

#[test]
fn picks_keep_bank_order() {
    let bank = Bank::try_from("811111111111119").unwrap();
    assert_eq!(bank.max_joltage(2).unwrap(), 89);

    let bank = Bank::try_from("234234234234278").unwrap();
    assert_eq!(bank.max_joltage(12).unwrap(), 434234234278);
}

#[test]
fn short_bank_is_error() {
    let bank = Bank::try_from("12").unwrap();

    assert!(bank.max_joltage(3).is_err());
    assert!(Bank::try_from("1a").is_err());
}
