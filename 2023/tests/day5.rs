use aoc2023::day5::{self, AlmanacBuilder};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day5-part1").unwrap();
    cmd.arg("samples/day5.txt");

    cmd.assert().success().stdout(str::diff("35\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day5-part2").unwrap();
    cmd.arg("samples/day5.txt");

    cmd.assert().success().stdout(str::diff("46\n"));
}

#[test]
fn work_packages_cover_range_once() {
    let packages = day5::work_packages(10..33, 4);
    assert_eq!(packages, vec![10..15, 15..20, 20..25, 25..33]);

    let packages = day5::work_packages(0..3, 8);
    assert_eq!(packages, vec![0..1, 1..2, 2..3]);

    assert!(day5::work_packages(5..5, 4).is_empty());
}

#[test]
fn missing_link_in_map_chain_is_error() {
    let mut builder = AlmanacBuilder::new();
    for line in ["seeds: 1 2", "", "seed-to-soil map:", "5 1 2"] {
        builder.add_line(line).unwrap();
    }
    let almanac = builder.build();

    assert!(almanac.lowest_location().is_err());
}

#[test]
fn unpaired_seed_is_error_for_ranges() {
    let mut builder = AlmanacBuilder::new();
    for line in ["seeds: 1 2 3", "", "seed-to-location map:", "5 1 2"] {
        builder.add_line(line).unwrap();
    }
    let almanac = builder.build();

    assert_eq!(almanac.lowest_location().unwrap(), 3);
    assert!(almanac.lowest_location_of_ranges().is_err());
}

#[test]
fn range_before_header_is_rejected() {
    let mut builder = AlmanacBuilder::new();
    builder.add_line("seeds: 1").unwrap();

    assert!(builder.add_line("5 1 2").is_err());
}
