use anyhow::{Context, Result};
use aoc2025::{day11, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let reactor = day11::read_reactor(&args.input_path).with_context(|| {
        format!(
            "Failed to read device list from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", reactor.path_n("svr", "out", &["dac", "fft"])?);
    Ok(())
}
