use anyhow::{Context, Result};
use aoc2025::{day7, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let manifold = day7::read_manifold(&args.input_path).with_context(|| {
        format!(
            "Failed to read tachyon manifold from given file({}).",
            args.input_path.display()
        )
    })?;
    let report = manifold.fire()?;
    println!("{}", report.timeline_n);
    Ok(())
}
