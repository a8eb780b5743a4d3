use anyhow::{Context, Result};
use aoc2025::{day5, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let inventory = day5::read_inventory(&args.input_path).with_context(|| {
        format!(
            "Failed to read ingredient database from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", inventory.fresh_id_n());
    Ok(())
}
