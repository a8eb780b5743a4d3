use std::{error, fmt::Display, path::Path};

use anyhow::Result;
use grid::Grid;

#[derive(Debug)]
pub enum Error {
    NoStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStart => write!(f, "No tachyon beam entry point(S) in the manifold."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Start,
    Empty,
    Splitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamReport {
    /// Splitters hit by at least one beam.
    pub split_n: usize,
    /// Distinct paths a single particle can take through the manifold.
    pub timeline_n: u64,
}

#[derive(Debug)]
pub struct Manifold(Grid<Cell>);

impl Manifold {
    pub fn new(grid: Grid<Cell>) -> Self {
        Self(grid)
    }

    /// Send the beam down from `S`, row by row.
    ///
    /// Each column tracks how many timelines have a beam in it. A splitter
    /// stops the beams in its column and passes them to both sides.
    pub fn fire(&self) -> Result<BeamReport, Error> {
        let start = self
            .0
            .find_position(|cell| *cell == Cell::Start)
            .ok_or(Error::NoStart)?;
        let col_n = self.0.col_n();
        let mut beams = vec![0u64; col_n];
        beams[start.c] = 1;

        let mut split_n = 0;
        for row in self.0.rows().skip(start.r + 1) {
            for (c, _) in row
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Splitter)
            {
                let beam_n = std::mem::take(&mut beams[c]);
                if beam_n == 0 {
                    continue;
                }

                split_n += 1;
                if let Some(left) = c.checked_sub(1) {
                    beams[left] += beam_n;
                }
                if c + 1 < col_n {
                    beams[c + 1] += beam_n;
                }
            }
        }

        Ok(BeamReport {
            split_n,
            timeline_n: beams.iter().sum(),
        })
    }
}

pub fn read_manifold<P: AsRef<Path>>(path: P) -> Result<Manifold> {
    let grid = grid::read_grid(path, |c, _| match c {
        'S' => Some(Cell::Start),
        '.' => Some(Cell::Empty),
        '^' => Some(Cell::Splitter),
        _ => None,
    })?;
    Ok(Manifold::new(grid))
}
