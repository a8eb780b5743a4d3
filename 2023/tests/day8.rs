use aoc2023::day8::NetworkBuilder;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day8-part1").unwrap();
    cmd.arg("samples/day8_1.txt");

    cmd.assert().success().stdout(str::diff("2\n"));
}

#[test]
fn part1_repeats_instructions() {
    let mut cmd = Command::cargo_bin("aoc2023-day8-part1").unwrap();
    cmd.arg("samples/day8_2.txt");

    cmd.assert().success().stdout(str::diff("6\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day8-part2").unwrap();
    cmd.arg("samples/day8_3.txt");

    cmd.assert().success().stdout(str::diff("6\n"));
}

#[test]
fn walk_into_loop_is_error() {
    let mut builder = NetworkBuilder::new();
    for line in ["L", "", "AAA = (BBB, BBB)", "BBB = (AAA, AAA)", "ZZZ = (ZZZ, ZZZ)"] {
        builder.add_line(line).unwrap();
    }
    let network = builder.build().unwrap();

    assert!(network.steps_to_zzz().is_err());
}

#[test]
fn unknown_node_is_error() {
    let mut builder = NetworkBuilder::new();
    for line in ["R", "AAA = (BBB, CCC)"] {
        builder.add_line(line).unwrap();
    }
    let network = builder.build().unwrap();

    assert!(network.steps_to_zzz().is_err());
}

#[test]
fn invalid_instruction_is_rejected() {
    let mut builder = NetworkBuilder::new();

    assert!(builder.add_line("LRX").is_err());
}
