use std::path::PathBuf;

use clap::Parser;

pub mod day11;
pub mod day14;
pub mod day15;
pub mod day17;
pub mod day21;
pub mod day23;
pub mod day3;
pub mod day5;
pub mod day8;
pub mod day9;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}
