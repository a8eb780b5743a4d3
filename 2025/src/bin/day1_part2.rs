use anyhow::{Context, Result};
use aoc2025::{day1, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let rotations = day1::read_rotations(&args.input_path).with_context(|| {
        format!(
            "Failed to read dial rotations from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", day1::passing_zero_n(&rotations));
    Ok(())
}
