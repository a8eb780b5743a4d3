use anyhow::{anyhow, Context, Result};
use aoc2023::{
    day17::{self, CrucibleRules},
    CLIArgs,
};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let heat_map = day17::read_heat_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read heat loss map from given file({}).",
            args.input_path.display()
        )
    })?;
    let heat_loss = heat_map
        .min_heat_loss(CrucibleRules::NORMAL)
        .ok_or_else(|| anyhow!("Crucible can't reach the machine parts factory."))?;
    println!("{}", heat_loss);
    Ok(())
}
