use anyhow::{Context, Result};
use aoc2025::day8::{self, ConnectionCLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = ConnectionCLIArgs::parse();
    let playground = day8::read_playground(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction boxes from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", playground.largest_circuits_product(args.pair_n)?);
    Ok(())
}
