use aoc2023::day15::{self, LensBoxes, Step};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day15-part1").unwrap();
    cmd.arg("samples/day15.txt");

    cmd.assert().success().stdout(str::diff("1320\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day15-part2").unwrap();
    cmd.arg("samples/day15.txt");

    cmd.assert().success().stdout(str::diff("145\n"));
}

#[test]
fn hash_of_words() {
    assert_eq!(day15::hash("HASH"), 52);
    assert_eq!(day15::hash("rn"), 0);
    assert_eq!(day15::hash("qp"), 1);
}

#[test]
fn replacing_lens_keeps_slot() {
    let mut boxes = LensBoxes::new();
    for text in ["rn=1", "cm=2", "rn=5"] {
        boxes.apply(&Step::try_from(text).unwrap());
    }

    // rn at slot 1 with 5, cm at slot 2 with 2, both in box 0.
    assert_eq!(boxes.focusing_power(), 5 + 2 * 2);
}

#[test]
fn malformed_steps_are_rejected() {
    assert!(Step::try_from("rn").is_err());
    assert!(Step::try_from("rn=x").is_err());
    assert!(Step::try_from("=3").is_err());
}
