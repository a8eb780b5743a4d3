use std::{error, fmt::Display, path::Path};

use anyhow::Result;
use grid::{Grid, Position};

#[derive(Debug)]
pub enum Error {
    InvalidNumber(String, Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidNumber(s, pos) => {
                write!(f, "Invalid number text({}) starting at {}.", s, pos)
            }
        }
    }
}

impl error::Error for Error {}

/// A run of digits on one row, `end_c` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchematicNumber {
    value: usize,
    r: usize,
    start_c: usize,
    end_c: usize,
}

impl SchematicNumber {
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn is_adjacent_to(&self, pos: &Position) -> bool {
        pos.r + 1 >= self.r
            && pos.r <= self.r + 1
            && pos.c + 1 >= self.start_c
            && pos.c <= self.end_c
    }
}

#[derive(Debug)]
pub struct Schematic {
    grid: Grid<char>,
    numbers: Vec<SchematicNumber>,
}

impl Schematic {
    pub fn new(grid: Grid<char>) -> Result<Self, Error> {
        let mut numbers = Vec::new();
        for (r, row) in grid.rows().enumerate() {
            let mut c = 0;
            while c < row.len() {
                if !row[c].is_ascii_digit() {
                    c += 1;
                    continue;
                }

                let start_c = c;
                while c < row.len() && row[c].is_ascii_digit() {
                    c += 1;
                }
                let text = row[start_c..c].iter().collect::<String>();
                let value = text
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidNumber(text.clone(), Position::new(r, start_c)))?;
                numbers.push(SchematicNumber {
                    value,
                    r,
                    start_c,
                    end_c: c,
                });
            }
        }

        Ok(Self { grid, numbers })
    }

    pub fn numbers(&self) -> &[SchematicNumber] {
        &self.numbers
    }

    pub fn part_numbers_sum(&self) -> usize {
        let symbol_positions = self.symbol_positions(|_| true);
        let part_numbers = self
            .numbers
            .iter()
            .filter(|n| symbol_positions.iter().any(|pos| n.is_adjacent_to(pos)))
            .collect::<Vec<_>>();
        log::info!(
            "{} of {} number(s) are part numbers.",
            part_numbers.len(),
            self.numbers.len()
        );

        part_numbers.iter().map(|n| n.value).sum()
    }

    /// Sum of products of the two numbers around every `*` touching exactly two.
    pub fn gear_ratios_sum(&self) -> usize {
        self.symbol_positions(|c| c == '*')
            .iter()
            .filter_map(|pos| {
                let around = self
                    .numbers
                    .iter()
                    .filter(|n| n.is_adjacent_to(pos))
                    .collect::<Vec<_>>();
                if around.len() == 2 {
                    Some(around[0].value * around[1].value)
                } else {
                    None
                }
            })
            .sum()
    }

    fn symbol_positions<F>(&self, mut accept: F) -> Vec<Position>
    where
        F: FnMut(char) -> bool,
    {
        self.grid
            .tiles()
            .filter(|(_, c)| is_symbol(**c) && accept(**c))
            .map(|(pos, _)| pos)
            .collect()
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_ascii_digit() && c != '.'
}

pub fn read_schematic<P: AsRef<Path>>(path: P) -> Result<Schematic> {
    let grid = grid::read_char_grid(path)?;
    Ok(Schematic::new(grid)?)
}
