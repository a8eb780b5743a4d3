use anyhow::{Context, Result};
use aoc2025::{day4, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let rolls = day4::read_rolls(&args.input_path).with_context(|| {
        format!(
            "Failed to read paper roll map from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", rolls.accessible_rolls().len());
    Ok(())
}
