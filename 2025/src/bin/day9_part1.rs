use anyhow::{Context, Result};
use aoc2025::{day9, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let floor = day9::read_floor(&args.input_path).with_context(|| {
        format!(
            "Failed to read red tiles from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", floor.largest_rect_area());
    Ok(())
}
