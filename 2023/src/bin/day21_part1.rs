use anyhow::{Context, Result};
use aoc2023::day21::{self, GardenCLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = GardenCLIArgs::parse();
    let garden = day21::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", garden.reachable_plot_n(args.steps));
    Ok(())
}
