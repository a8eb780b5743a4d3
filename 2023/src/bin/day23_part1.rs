use anyhow::{anyhow, Context, Result};
use aoc2023::{day23, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let map = day23::read_trail_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read trail map from given file({}).",
            args.input_path.display()
        )
    })?;
    let steps = map
        .longest_hike(true)?
        .ok_or_else(|| anyhow!("No hike leads from the entrance to the exit."))?;
    println!("{}", steps);
    Ok(())
}
