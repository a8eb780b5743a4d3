use anyhow::{Context, Result};
use aoc2023::{day15, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let steps = day15::read_steps(&args.input_path).with_context(|| {
        format!(
            "Failed to read initialization sequence from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", steps.iter().map(|s| s.hash()).sum::<usize>());
    Ok(())
}
