use anyhow::{Context, Result};
use aoc2023::{day14, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let mut platform = day14::read_platform(&args.input_path).with_context(|| {
        format!(
            "Failed to read platform from given file({}).",
            args.input_path.display()
        )
    })?;
    platform.spin_n(day14::SPIN_CYCLE_N)?;
    println!("{}", platform.north_load());
    Ok(())
}
