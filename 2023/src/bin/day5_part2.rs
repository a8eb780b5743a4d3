use anyhow::{Context, Result};
use aoc2023::{day5, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let almanac = day5::read_almanac(&args.input_path).with_context(|| {
        format!(
            "Failed to read almanac from given file({}).",
            args.input_path.display()
        )
    })?;
    let location = almanac
        .lowest_location_of_ranges()
        .context("Failed to map seed ranges to locations.")?;
    println!("{}", location);
    Ok(())
}
