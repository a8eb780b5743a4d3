use aoc2025::day5::{self, InventoryBuilder};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day5-part1").unwrap();
    cmd.arg("samples/day5.txt");

    cmd.assert().success().stdout(str::diff("3\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day5-part2").unwrap();
    cmd.arg("samples/day5.txt");

    cmd.assert().success().stdout(str::diff("14\n"));
}

#[test]
fn overlapping_ranges_merge() {
    let inventory = day5::read_inventory("samples/day5.txt").unwrap();

    assert_eq!(inventory.merged_ranges(), vec![3..=5, 10..=20]);
}

#[test]
fn touching_and_nested_ranges_merge() {
    let mut builder = InventoryBuilder::new();
    for line in ["1-4", "5-9", "2-3", "20-20"] {
        builder.add_line(line).unwrap();
    }
    let inventory = builder.build();

    assert_eq!(inventory.merged_ranges(), vec![1..=9, 20..=20]);
    assert_eq!(inventory.fresh_id_n(), 10);
}

#[test]
fn reversed_range_is_rejected() {
    let mut builder = InventoryBuilder::new();

    assert!(builder.add_line("9-3").is_err());
}
