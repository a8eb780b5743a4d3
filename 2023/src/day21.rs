use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use grid::{search, Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    NoStart,
    MultipleStarts(Position, Position),
    NotSquare(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStart => write!(f, "No start plot(S) in the garden map."),
            Error::MultipleStarts(first, second) => write!(
                f,
                "Found more than one start plot, at {} and {}.",
                first, second
            ),
            Error::NotSquare(row_n, col_n) => write!(
                f,
                "Expect a square garden map for extrapolation, given {}x{}.",
                row_n, col_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct GardenCLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 64)]
    pub steps: usize,
}

#[derive(Debug, Parser)]
pub struct InfiniteGardenCLIArgs {
    pub input_path: PathBuf,
    #[arg(default_value_t = 26_501_365)]
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    Plot,
    Rock,
}

impl Tile {
    pub fn is_open(&self) -> bool {
        !matches!(self, Tile::Rock)
    }
}

#[derive(Debug)]
pub struct Garden {
    grid: Grid<Tile>,
    start: Position,
}

impl Garden {
    pub fn new(grid: Grid<Tile>) -> Result<Self, Error> {
        let starts = grid
            .tiles()
            .filter(|(_, tile)| **tile == Tile::Start)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        match starts[..] {
            [] => Err(Error::NoStart),
            [start] => Ok(Self { grid, start }),
            [first, second, ..] => Err(Error::MultipleStarts(first, second)),
        }
    }

    /// Plots where a walk of exactly `steps` steps from the start can end.
    ///
    /// Moving back and forth wastes two steps, so the search jumps two steps
    /// at a time and keeps every plot reached within budget.
    pub fn reachable_plot_n(&self, steps: usize) -> usize {
        let starts = if steps % 2 == 0 {
            vec![(self.start, 0)]
        } else {
            self.grid
                .neighbors4(&self.start)
                .filter(|pos| self.is_open(pos))
                .map(|pos| (pos, 1))
                .collect()
        };

        search::dijkstra_costs(starts, |pos| self.jumps(pos), steps).len()
    }

    /// Same count on the map repeated infinitely in every direction.
    ///
    /// Walks long enough to cross the map twice are sampled at three lengths
    /// one map size apart and extrapolated with the quadratic through them.
    pub fn reachable_wrapped_plot_n(&self, steps: usize) -> Result<usize, Error> {
        let size = self.grid.row_n();
        let rem = steps % size.max(1);
        if size == 0 || steps < rem + 2 * size {
            return Ok(self.reachable_wrapped_exact(steps));
        }

        if self.grid.col_n() != size {
            return Err(Error::NotSquare(self.grid.row_n(), self.grid.col_n()));
        }

        let samples = [rem, rem + size, rem + 2 * size].map(|n| self.reachable_wrapped_exact(n));
        let n = steps / size;
        log::info!(
            "Extrapolating {} map width(s) from samples {:?} at {} + k*{} step(s).",
            n,
            samples,
            rem,
            size
        );
        let [a0, a1, a2] = samples.map(|s| s as i128);
        let n = n as i128;
        let count = a0 + n * (a1 - a0) + n * (n - 1) / 2 * (a2 - 2 * a1 + a0);
        Ok(count as usize)
    }

    /// Breadth-first count over the infinite map, no extrapolation.
    pub fn reachable_wrapped_exact(&self, steps: usize) -> usize {
        let start = (self.start.r as isize, self.start.c as isize);
        let steps_of_plots = search::bfs_steps(
            start,
            |(r, c)| {
                let (r, c) = (*r, *c);
                [(r - 1, c), (r, c + 1), (r + 1, c), (r, c - 1)]
                    .into_iter()
                    .filter(|(r, c)| self.grid.wrapped_tile(*r, *c).is_some_and(Tile::is_open))
                    .collect::<Vec<_>>()
            },
            steps,
        );

        steps_of_plots
            .values()
            .filter(|n| *n % 2 == steps % 2)
            .count()
    }

    fn is_open(&self, pos: &Position) -> bool {
        self.grid.tile(pos).is_some_and(Tile::is_open)
    }

    fn jumps(&self, pos: &Position) -> Vec<(Position, usize)> {
        let mut targets = Vec::new();
        for dir in Direction::all_dirs() {
            let Some(mid) = pos.neighbor(*dir) else {
                continue;
            };
            if !self.is_open(&mid) {
                continue;
            }

            if let Some(far) = mid.neighbor(*dir) {
                targets.push(far);
            }
            // Diagonals only need one of their two corners open.
            if let Some(corner) = mid.neighbor(dir.turn_clockwise()) {
                targets.push(corner);
            }
            if let Some(corner) = mid.neighbor(dir.turn_counterclockwise()) {
                targets.push(corner);
            }
        }

        targets.sort();
        targets.dedup();
        targets
            .into_iter()
            .filter(|target| self.is_open(target))
            .map(|target| (target, 2))
            .collect()
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let grid = grid::read_grid(path, |c, _| match c {
        'S' => Some(Tile::Start),
        '.' => Some(Tile::Plot),
        '#' => Some(Tile::Rock),
        _ => None,
    })?;
    Ok(Garden::new(grid)?)
}
