use anyhow::{Context, Result};
use aoc2025::{day12, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let farm = day12::read_tree_farm(&args.input_path).with_context(|| {
        format!(
            "Failed to read presents and regions from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", farm.fitting_region_n()?);
    Ok(())
}
