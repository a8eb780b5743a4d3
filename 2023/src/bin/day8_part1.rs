use anyhow::{Context, Result};
use aoc2023::{day8, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let network = day8::read_network(&args.input_path).with_context(|| {
        format!(
            "Failed to read network from given file({}).",
            args.input_path.display()
        )
    })?;
    let steps = network
        .steps_to_zzz()
        .context("Failed to walk from AAA to ZZZ.")?;
    println!("{}", steps);
    Ok(())
}
