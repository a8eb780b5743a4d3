use aoc2023::day23::{self, Tile, TrailMap};
use assert_cmd::Command;
use grid::GridBuilder;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day23-part1").unwrap();
    cmd.arg("samples/day23.txt");

    cmd.assert().success().stdout(str::diff("94\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day23-part2").unwrap();
    cmd.arg("samples/day23.txt");

    cmd.assert().success().stdout(str::diff("154\n"));
}

#[test]
fn dry_hike_is_never_shorter() {
    let map = day23::read_trail_map("samples/day23.txt").unwrap();
    let slippery = map.longest_hike(true).unwrap().unwrap();
    let dry = map.longest_hike(false).unwrap().unwrap();

    assert!(dry >= slippery);
}

#[test]
fn map_without_exit_is_rejected() {
    let mut builder = GridBuilder::new();
    for row in ["#.#", "#.#", "###"] {
        builder
            .add_row(row, |c, _| match c {
                '.' => Some(Tile::Path),
                _ => Some(Tile::Forest),
            })
            .unwrap();
    }

    assert!(TrailMap::new(builder.build()).is_err());
}
