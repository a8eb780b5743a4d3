use anyhow::{Context, Result};
use aoc2023::{day9, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let histories = day9::read_histories(&args.input_path).with_context(|| {
        format!(
            "Failed to read sensor histories from given file({}).",
            args.input_path.display()
        )
    })?;
    let sum = histories.iter().map(|h| h.next_value()).sum::<i64>();
    println!("{}", sum);
    Ok(())
}
