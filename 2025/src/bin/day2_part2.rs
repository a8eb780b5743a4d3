use anyhow::{Context, Result};
use aoc2025::{
    day2::{self, Repetition},
    CLIArgs,
};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let ranges = day2::read_ranges(&args.input_path).with_context(|| {
        format!(
            "Failed to read id ranges from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", day2::invalid_id_sum(&ranges, Repetition::AtLeastTwice));
    Ok(())
}
