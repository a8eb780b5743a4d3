use aoc2025::day11::{self, Reactor};
use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day11-part1").unwrap();
    cmd.arg("samples/day11_1.txt");

    cmd.assert().success().stdout(str::diff("5\n"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2025-day11-part2").unwrap();
    cmd.arg("samples/day11_2.txt");

    cmd.assert().success().stdout(str::diff("2\n"));
}

#[test]
fn required_devices_filter_paths() {
    let reactor = day11::read_reactor("samples/day11_2.txt").unwrap();

    assert_eq!(reactor.path_n("svr", "out", &[]).unwrap(), 8);
    assert_eq!(reactor.path_n("svr", "out", &["fft"]).unwrap(), 4);
    assert_eq!(reactor.path_n("svr", "out", &["dac", "fft"]).unwrap(), 2);
}

#[test]
fn unknown_start_has_no_paths() {
    let reactor = day11::read_reactor("samples/day11_1.txt").unwrap();

    assert_eq!(reactor.path_n("zzz", "out", &[]).unwrap(), 0);
}

#[test]
fn loop_is_error() {
    let mut reactor = Reactor::default();
    reactor.add_line("aaa: bbb").unwrap();
    reactor.add_line("bbb: aaa out").unwrap();

    assert!(reactor.path_n("aaa", "out", &[]).is_err());
    assert!(reactor.add_line("aaa: out").is_err());
}
