use aoc2025::day12::{self, Present, TreeFarmBuilder};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day12-part1").unwrap();
    cmd.arg("samples/day12.txt");

    cmd.assert().success().stdout(str::diff("2\n"));
}

#[test]
fn each_sample_region() {
    let farm = day12::read_tree_farm("samples/day12.txt").unwrap();
    let fits = farm
        .regions()
        .iter()
        .map(|region| farm.fits(region).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(fits, vec![true, true, false]);
}

#[test]
fn variants_are_distinct() {
    let square = Present::new([(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(square.variants().len(), 1);

    let ell = Present::new([(0, 0), (1, 0), (2, 0), (2, 1)]);
    assert_eq!(ell.variants().len(), 8);

    let bar = Present::new([(0, 0), (0, 1), (0, 2)]);
    assert_eq!(bar.variants().len(), 2);
}

#[test]
fn packing_needs_rotation() {
    let mut builder = TreeFarmBuilder::new();
    for line in ["0:", "###", "", "1x3: 1", "3x1: 1", "2x2: 1"] {
        builder.add_line(line).unwrap();
    }
    let farm = builder.build().unwrap();
    let fits = farm
        .regions()
        .iter()
        .map(|region| farm.fits(region).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(fits, vec![true, true, false]);
}

#[test]
fn out_of_order_present_is_rejected() {
    let mut builder = TreeFarmBuilder::new();

    assert!(builder.add_line("1:").is_err());
}
