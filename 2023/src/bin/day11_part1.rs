use anyhow::{Context, Result};
use aoc2023::{day11, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let image = day11::read_image(&args.input_path).with_context(|| {
        format!(
            "Failed to read galaxy image from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", image.distances_sum(2));
    Ok(())
}
