use aoc2023::day11;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part1").unwrap();
    cmd.arg("samples/day11.txt");

    cmd.assert().success().stdout(str::diff("374\n"));
}

#[test]
fn part2_with_factor_10() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.args(["samples/day11.txt", "10"]);

    cmd.assert().success().stdout(str::diff("1030\n"));
}

#[test]
fn part2_with_factor_100() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.args(["samples/day11.txt", "100"]);

    cmd.assert().success().stdout(str::diff("8410\n"));
}

#[test]
fn part2_rejects_zero_factor() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.args(["samples/day11.txt", "0"]);

    cmd.assert().failure();
}

#[test]
fn factor_one_keeps_original_distances() {
    let image = day11::read_image("samples/day11.txt").unwrap();

    assert_eq!(image.galaxy_n(), 9);
    assert_eq!(image.distances_sum(1), 292);
}
