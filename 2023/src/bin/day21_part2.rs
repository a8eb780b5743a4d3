use anyhow::{Context, Result};
use aoc2023::day21::{self, InfiniteGardenCLIArgs};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = InfiniteGardenCLIArgs::parse();
    let garden = day21::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;
    let plot_n = garden
        .reachable_wrapped_plot_n(args.steps)
        .with_context(|| format!("Failed to count plots reachable in {} step(s).", args.steps))?;
    println!("{}", plot_n);
    Ok(())
}
