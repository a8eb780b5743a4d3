use anyhow::{Context, Result};
use aoc2025::{day3, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let banks = day3::read_banks(&args.input_path).with_context(|| {
        format!(
            "Failed to read battery banks from given file({}).",
            args.input_path.display()
        )
    })?;
    let joltage = day3::total_joltage(&banks, 12)?;
    println!("{}", joltage);
    Ok(())
}
