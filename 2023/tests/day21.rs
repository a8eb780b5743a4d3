use aoc2023::day21;
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part1").unwrap();
    cmd.args(["samples/day21.txt", "6"]);

    cmd.assert().success().stdout(str::diff("16\n"));
}

#[test]
fn part2_short_walks() {
    for (steps, expect) in [("6", "16\n"), ("10", "50\n")] {
        let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
        cmd.args(["samples/day21.txt", steps]);

        cmd.assert().success().stdout(str::diff(expect));
    }
}

#[test]
fn jumps_match_wrapped_walk_inside_map() {
    let garden = day21::read_garden("samples/day21.txt").unwrap();

    for steps in 0..=5 {
        assert_eq!(
            garden.reachable_plot_n(steps),
            garden.reachable_wrapped_exact(steps),
            "{} step(s)",
            steps
        );
    }
}

#[test]
fn wrapped_walks_leave_the_map() {
    let garden = day21::read_garden("samples/day21.txt").unwrap();

    assert_eq!(garden.reachable_wrapped_exact(50), 1594);
    assert_eq!(garden.reachable_wrapped_exact(100), 6536);
}

#[test]
fn map_without_start_is_rejected() {
    assert!(day21::read_garden("samples/day14.txt").is_err());
}

#[test]
fn part2_long_walk_on_open_map() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.args(["samples/day21_open.txt", "101"]);

    cmd.assert().success().stdout(str::diff("10404\n"));
}

#[test]
fn extrapolation_matches_exact_walk_on_open_map() {
    let garden = day21::read_garden("samples/day21_open.txt").unwrap();

    for steps in [12, 17, 27, 52, 101] {
        let extrapolated = garden.reachable_wrapped_plot_n(steps).unwrap();
        assert_eq!(extrapolated, (steps + 1) * (steps + 1), "{} step(s)", steps);
        assert_eq!(
            extrapolated,
            garden.reachable_wrapped_exact(steps),
            "{} step(s)",
            steps
        );
    }
}

#[test]
fn long_walk_on_non_square_map_is_rejected() {
    let garden = day21::read_garden("samples/day21_wide.txt").unwrap();

    assert!(matches!(
        garden.reachable_wrapped_plot_n(20),
        Err(day21::Error::NotSquare(3, 5))
    ));
    // Short walks are still counted exactly.
    assert_eq!(garden.reachable_wrapped_plot_n(4).unwrap(), 25);

    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.args(["samples/day21_wide.txt", "20"]);
    cmd.assert().failure();
}
