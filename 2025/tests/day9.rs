use aoc2025::day9::{Floor, RedTile};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day9-part1").unwrap();
    cmd.arg("samples/day9.txt");

    cmd.assert().success().stdout(str::diff("50\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day9-part2").unwrap();
    cmd.arg("samples/day9.txt");

    cmd.assert().success().stdout(str::diff("24\n"));
}

fn floor(tiles: &[(i64, i64)]) -> Floor {
    Floor::new(tiles.iter().map(|(x, y)| RedTile { x: *x, y: *y }).collect()).unwrap()
}

#[test]
fn square_loop_fits_whole() {
    let floor = floor(&[(0, 0), (4, 0), (4, 4), (0, 4)]);

    assert_eq!(floor.largest_rect_area(), 25);
    assert_eq!(floor.largest_inner_rect_area(), 25);
}

#[test]
fn notch_excludes_outside_rectangles() {
    // U shape opening upwards, the gap between the arms is outside.
    let floor = floor(&[
        (0, 0),
        (2, 0),
        (2, 3),
        (4, 3),
        (4, 0),
        (6, 0),
        (6, 5),
        (0, 5),
    ]);

    assert_eq!(floor.largest_rect_area(), 42);
    assert_eq!(floor.largest_inner_rect_area(), 18);
}

#[test]
fn diagonal_edge_is_rejected() {
    let tiles = vec![RedTile { x: 0, y: 0 }, RedTile { x: 2, y: 2 }];

    assert!(Floor::new(tiles).is_err());
}

#[test]
fn single_row_over_outside_notch_is_rejected() {
    // The top row is cut between x = 5 and x = 7, tile (6, 0) is outside.
    let floor = floor(&[
        (0, 0),
        (5, 0),
        (5, 1),
        (7, 1),
        (7, 0),
        (20, 0),
        (20, 2),
        (0, 2),
    ]);
    let tile = |x, y| RedTile { x, y };

    assert!(!floor.is_inner_rect(&tile(0, 0), &tile(20, 0)));
    assert!(floor.is_inner_rect(&tile(0, 2), &tile(20, 2)));
    assert!(floor.is_inner_rect(&tile(7, 0), &tile(20, 2)));
    assert_eq!(floor.largest_inner_rect_area(), 42);
}
