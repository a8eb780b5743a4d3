use anyhow::{anyhow, Context, Result};
use aoc2025::{day8, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let playground = day8::read_playground(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction boxes from given file({}).",
            args.input_path.display()
        )
    })?;
    let product = playground
        .last_connection_product()
        .ok_or_else(|| anyhow!("Boxes never join into a single circuit."))?;
    println!("{}", product);
    Ok(())
}
