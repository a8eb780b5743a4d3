use aoc2025::day8::{self, Circuits, JunctionBox};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day8-part1").unwrap();
    cmd.args(["samples/day8.txt", "10"]);

    cmd.assert().success().stdout(str::diff("40\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day8-part2").unwrap();
    cmd.arg("samples/day8.txt");

    cmd.assert().success().stdout(str::diff("25272\n"));
}

#[test]
fn closest_pairs_join_first() {
    let playground = day8::read_playground("samples/day8.txt").unwrap();

    // 162,817,812 and 425,690,689 are closest, then 162,817,812 and 431,825,988.
    assert_eq!(playground.largest_circuits_product(1).unwrap(), 2);
    assert_eq!(playground.largest_circuits_product(2).unwrap(), 3);
}

#[test]
fn circuits_track_sizes() {
    let mut circuits = Circuits::new(5);
    assert!(circuits.join(0, 1));
    assert!(circuits.join(2, 3));
    assert!(circuits.join(1, 3));
    assert!(!circuits.join(0, 2));

    assert_eq!(circuits.circuit_n(), 2);
    assert_eq!(circuits.sizes(), vec![4, 1]);
    assert_eq!(circuits.find(0), circuits.find(3));
}

#[test]
fn distance_is_squared() {
    let a = JunctionBox::try_from("0,0,0").unwrap();
    let b = JunctionBox::try_from("1,-2,3").unwrap();

    assert_eq!(a.squared_distance(&b), 14);
    assert!(JunctionBox::try_from("1,2").is_err());
}
