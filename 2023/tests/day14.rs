use aoc2023::day14;
use assert_cmd::Command;
use grid::Direction;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day14-part1").unwrap();
    cmd.arg("samples/day14.txt");

    cmd.assert().success().stdout(str::diff("136\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2023-day14-part2").unwrap();
    cmd.arg("samples/day14.txt");

    cmd.assert().success().stdout(str::diff("64\n"));
}

#[test]
fn tilt_north_stops_at_cubes() {
    let mut platform = day14::read_platform("samples/day14.txt").unwrap();
    platform.tilt(Direction::North).unwrap();

    let expect = "OOOO.#.O..\n\
                  OO..#....#\n\
                  OO..O##..O\n\
                  O..#.OO...\n\
                  ........#.\n\
                  ..#....#.#\n\
                  ..O..#.O.O\n\
                  ..O.......\n\
                  #....###..\n\
                  #....#....\n";
    assert_eq!(platform.grid().to_string(), expect);
}

#[test]
fn one_spin_cycle() {
    let mut platform = day14::read_platform("samples/day14.txt").unwrap();
    platform.spin().unwrap();

    let expect = ".....#....\n\
                  ....#...O#\n\
                  ...OO##...\n\
                  .OO#......\n\
                  .....OOO#.\n\
                  .O#...O#.#\n\
                  ....O#....\n\
                  ......OOOO\n\
                  #...O###..\n\
                  #..OO#....\n";
    assert_eq!(platform.grid().to_string(), expect);
}

#[test]
fn spin_n_matches_plain_spins() {
    let mut skipping = day14::read_platform("samples/day14.txt").unwrap();
    let mut plain = skipping.clone();
    skipping.spin_n(40).unwrap();
    for _ in 0..40 {
        plain.spin().unwrap();
    }

    assert_eq!(skipping, plain);
}

#[test]
fn tilt_every_way_keeps_rocks() {
    let mut platform = day14::read_platform("samples/day14.txt").unwrap();
    let round_n = |platform: &day14::Platform| {
        platform
            .grid()
            .tiles()
            .filter(|(_, rock)| **rock == day14::Rock::Round)
            .count()
    };
    let before = round_n(&platform);

    for dir in [
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::North,
    ] {
        assert!(platform.tilt(dir).is_ok(), "tilt {:?}", dir);
    }

    assert_eq!(round_n(&platform), before);
}
