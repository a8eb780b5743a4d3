use anyhow::{Context, Result};
use aoc2023::{day3, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let schematic = day3::read_schematic(&args.input_path).with_context(|| {
        format!(
            "Failed to read engine schematic from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", schematic.gear_ratios_sum());
    Ok(())
}
