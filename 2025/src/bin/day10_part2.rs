use anyhow::{anyhow, Context, Result};
use aoc2025::{day10, CLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let machines = day10::read_machines(&args.input_path).with_context(|| {
        format!(
            "Failed to read machine manual from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut total = 0;
    for (ind, machine) in machines.iter().enumerate() {
        total += machine
            .min_joltage_presses()
            .ok_or_else(|| anyhow!("Joltages of machine {} can't be configured.", ind + 1))?;
    }
    println!("{}", total);
    Ok(())
}
