use std::{collections::HashMap, fmt::Display, path::Path};

use anyhow::Result;
use grid::{Direction, Grid};

pub const SPIN_CYCLE_N: usize = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rock {
    Round,
    Cube,
    Empty,
}

impl TryFrom<char> for Rock {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'O' => Ok(Rock::Round),
            '#' => Ok(Rock::Cube),
            '.' => Ok(Rock::Empty),
            other => Err(other),
        }
    }
}

impl Display for Rock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Rock::Round => 'O',
            Rock::Cube => '#',
            Rock::Empty => '.',
        };
        write!(f, "{}", c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform(Grid<Rock>);

impl Platform {
    pub fn grid(&self) -> &Grid<Rock> {
        &self.0
    }

    /// Roll every round rock as far as it goes towards `dir`.
    pub fn tilt(&mut self, dir: Direction) -> Result<(), grid::Error> {
        for index in 0..self.0.line_n(dir) {
            let mut line = self
                .0
                .extract_line(index, dir)
                .ok_or(grid::Error::LineOutOfRange(index, dir))?;
            roll_to_end(&mut line);
            self.0.set_line(index, dir, &line)?;
        }

        Ok(())
    }

    pub fn spin(&mut self) -> Result<(), grid::Error> {
        for dir in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            self.tilt(dir)?;
        }

        Ok(())
    }

    /// Run `cycle_n` spin cycles, skipping whole periods once a state repeats.
    pub fn spin_n(&mut self, cycle_n: usize) -> Result<(), grid::Error> {
        let mut seen = HashMap::new();
        let mut cycle_ind = 0;
        while cycle_ind < cycle_n {
            if let Some(prev_ind) = seen.insert(self.clone(), cycle_ind) {
                let period = cycle_ind - prev_ind;
                let left_n = (cycle_n - cycle_ind) % period;
                log::info!(
                    "State after {} cycle(s) repeats the one after {}, period {}, {} cycle(s) left.",
                    cycle_ind,
                    prev_ind,
                    period,
                    left_n
                );
                for _ in 0..left_n {
                    self.spin()?;
                }
                return Ok(());
            }

            self.spin()?;
            cycle_ind += 1;
        }

        Ok(())
    }

    /// Each round rock weighs its distance to the south edge.
    pub fn north_load(&self) -> usize {
        let row_n = self.0.row_n();
        self.0
            .tiles()
            .filter(|(_, rock)| **rock == Rock::Round)
            .map(|(pos, _)| row_n - pos.r)
            .sum()
    }
}

/// Move round rocks to the end of every run delimited by cube rocks.
fn roll_to_end(line: &mut [Rock]) {
    let mut seg_start = 0;
    for ind in 0..=line.len() {
        if ind < line.len() && line[ind] != Rock::Cube {
            continue;
        }

        let segment = &mut line[seg_start..ind];
        let round_n = segment.iter().filter(|r| **r == Rock::Round).count();
        let empty_n = segment.len() - round_n;
        segment[..empty_n].fill(Rock::Empty);
        segment[empty_n..].fill(Rock::Round);
        seg_start = ind + 1;
    }
}

pub fn read_platform<P: AsRef<Path>>(path: P) -> Result<Platform> {
    let grid = grid::read_grid(path, |c, _| Rock::try_from(c).ok())?;
    Ok(Platform(grid))
}
