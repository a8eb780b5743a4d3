use anyhow::{Context, Result};
use aoc2025::{
    day6::{self, Reading},
    CLIArgs,
};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let worksheet = day6::read_worksheet(&args.input_path).with_context(|| {
        format!(
            "Failed to read math worksheet from given file({}).",
            args.input_path.display()
        )
    })?;
    log::debug!("Worksheet has {} problem(s).", worksheet.problem_n());
    println!("{}", worksheet.grand_total(Reading::Rows)?);
    Ok(())
}
