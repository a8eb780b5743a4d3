use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use grid::{Grid, Position};

#[derive(Debug, Parser)]
pub struct ExpansionCLIArgs {
    pub input_path: PathBuf,
    /// Number of rows (columns) each empty row (column) grows into.
    #[arg(default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1..5_000_000))]
    pub factor: u64,
}

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<Position>,
    empty_rows_before: Vec<u64>,
    empty_cols_before: Vec<u64>,
}

impl Image {
    pub fn new(grid: &Grid<bool>) -> Self {
        let galaxies = grid
            .tiles()
            .filter(|(_, is_galaxy)| **is_galaxy)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        let mut row_has_galaxy = vec![false; grid.row_n()];
        let mut col_has_galaxy = vec![false; grid.col_n()];
        for pos in &galaxies {
            row_has_galaxy[pos.r] = true;
            col_has_galaxy[pos.c] = true;
        }

        Self {
            galaxies,
            empty_rows_before: empty_prefix_counts(&row_has_galaxy),
            empty_cols_before: empty_prefix_counts(&col_has_galaxy),
        }
    }

    pub fn galaxy_n(&self) -> usize {
        self.galaxies.len()
    }

    /// Sum of Manhattan distances over every unordered galaxy pair after expansion.
    pub fn distances_sum(&self, factor: u64) -> u64 {
        let expanded = self
            .galaxies
            .iter()
            .map(|pos| {
                (
                    pos.r as u64 + self.empty_rows_before[pos.r] * (factor - 1),
                    pos.c as u64 + self.empty_cols_before[pos.c] * (factor - 1),
                )
            })
            .collect::<Vec<_>>();
        log::debug!(
            "{} galaxies, {} empty row(s), {} empty column(s).",
            expanded.len(),
            self.empty_rows_before.last().copied().unwrap_or(0),
            self.empty_cols_before.last().copied().unwrap_or(0)
        );

        expanded
            .iter()
            .enumerate()
            .flat_map(|(ind, (r0, c0))| {
                expanded[(ind + 1)..]
                    .iter()
                    .map(move |(r1, c1)| r0.abs_diff(*r1) + c0.abs_diff(*c1))
            })
            .sum()
    }
}

/// Count of lines without galaxy strictly before each index, plus the total at the end.
fn empty_prefix_counts(has_galaxy: &[bool]) -> Vec<u64> {
    let mut counts = Vec::with_capacity(has_galaxy.len() + 1);
    let mut count = 0;
    for has in has_galaxy {
        counts.push(count);
        if !has {
            count += 1;
        }
    }
    counts.push(count);
    counts
}

pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let grid = grid::read_grid(path, |c, _| match c {
        '#' => Some(true),
        '.' => Some(false),
        _ => None,
    })?;
    Ok(Image::new(&grid))
}
