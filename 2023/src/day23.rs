use std::{error, fmt::Display, path::Path};

use anyhow::Result;
use grid::{Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    NoEntrance,
    NoExit,
    TooManyJunctions(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoEntrance => write!(f, "No path tile in the top row."),
            Error::NoExit => write!(f, "No path tile in the bottom row."),
            Error::TooManyJunctions(n) => write!(
                f,
                "Found {} junctions, at most {} are supported.",
                n,
                MAX_JUNCTION_N
            ),
        }
    }
}

impl error::Error for Error {}

const MAX_JUNCTION_N: usize = u64::BITS as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Path,
    Forest,
    Slope(Direction),
}

impl Tile {
    pub fn is_open(&self) -> bool {
        !matches!(self, Tile::Forest)
    }
}

#[derive(Debug)]
pub struct TrailMap {
    grid: Grid<Tile>,
    entrance: Position,
    exit: Position,
}

impl TrailMap {
    pub fn new(grid: Grid<Tile>) -> Result<Self, Error> {
        let entrance = (0..grid.col_n())
            .map(|c| Position::new(0, c))
            .find(|pos| grid.tile(pos) == Some(&Tile::Path))
            .ok_or(Error::NoEntrance)?;
        let last_r = grid.row_n().checked_sub(1).ok_or(Error::NoExit)?;
        let exit = (0..grid.col_n())
            .map(|c| Position::new(last_r, c))
            .find(|pos| grid.tile(pos) == Some(&Tile::Path))
            .ok_or(Error::NoExit)?;

        Ok(Self {
            grid,
            entrance,
            exit,
        })
    }

    /// Steps of the longest hike from entrance to exit that never visits a tile twice.
    ///
    /// With `slippery`, slopes may only be left downhill.
    pub fn longest_hike(&self, slippery: bool) -> Result<Option<usize>, Error> {
        let trails = Trails::new(self, slippery)?;
        log::debug!(
            "Compressed map into {} junction(s) and {} trail(s).",
            trails.edges.len(),
            trails.edges.iter().map(Vec::len).sum::<usize>()
        );

        let mut longest = None;
        trails.search(0, 1, 0, &mut longest);
        Ok(longest)
    }

    fn is_junction(&self, pos: &Position) -> bool {
        *pos == self.entrance
            || *pos == self.exit
            || self
                .grid
                .neighbors4(pos)
                .filter(|next| self.is_open(next))
                .count()
                >= 3
    }

    fn is_open(&self, pos: &Position) -> bool {
        self.grid.tile(pos).is_some_and(Tile::is_open)
    }

    fn can_leave(&self, pos: &Position, dir: Direction, slippery: bool) -> bool {
        match self.grid.tile(pos) {
            Some(Tile::Slope(slope_dir)) if slippery => *slope_dir == dir,
            Some(tile) => tile.is_open(),
            None => false,
        }
    }

    /// Follow the corridor leaving `from` towards `dir` until the next junction.
    fn follow_trail(
        &self,
        from: Position,
        dir: Direction,
        slippery: bool,
    ) -> Option<(Position, usize)> {
        let mut prev = from;
        let mut dir = dir;
        let mut step_n = 0;
        loop {
            if !self.can_leave(&prev, dir, slippery) {
                return None;
            }
            let cur = prev.neighbor(dir).filter(|pos| self.is_open(pos))?;
            step_n += 1;
            if self.is_junction(&cur) {
                return Some((cur, step_n));
            }

            dir = *Direction::all_dirs().iter().find(|next_dir| {
                **next_dir != dir.reverse()
                    && cur
                        .neighbor(**next_dir)
                        .is_some_and(|next| self.is_open(&next))
            })?;
            prev = cur;
        }
    }
}

/// Junction graph, index 0 is the entrance and 1 the exit.
struct Trails {
    edges: Vec<Vec<(usize, usize)>>,
}

impl Trails {
    fn new(map: &TrailMap, slippery: bool) -> Result<Self, Error> {
        let mut junctions = vec![map.entrance, map.exit];
        junctions.extend(
            map.grid
                .positions()
                .filter(|pos| *pos != map.entrance && *pos != map.exit)
                .filter(|pos| map.is_open(pos) && map.is_junction(pos)),
        );
        if junctions.len() > MAX_JUNCTION_N {
            return Err(Error::TooManyJunctions(junctions.len()));
        }

        let edges = junctions
            .iter()
            .map(|from| {
                Direction::all_dirs()
                    .iter()
                    .filter_map(|dir| map.follow_trail(*from, *dir, slippery))
                    .filter_map(|(to, step_n)| {
                        junctions
                            .iter()
                            .position(|pos| *pos == to)
                            .map(|ind| (ind, step_n))
                    })
                    .collect()
            })
            .collect();

        Ok(Self { edges })
    }

    fn search(&self, cur: usize, target: usize, visited: u64, longest: &mut Option<usize>) {
        self.search_from(cur, target, visited | (1 << cur), 0, longest);
    }

    fn search_from(
        &self,
        cur: usize,
        target: usize,
        visited: u64,
        length: usize,
        longest: &mut Option<usize>,
    ) {
        if cur == target {
            if longest.map_or(true, |l| length > l) {
                *longest = Some(length);
            }
            return;
        }

        for (next, step_n) in &self.edges[cur] {
            let mask = 1u64 << next;
            if visited & mask == 0 {
                self.search_from(*next, target, visited | mask, length + step_n, longest);
            }
        }
    }
}

pub fn read_trail_map<P: AsRef<Path>>(path: P) -> Result<TrailMap> {
    let grid = grid::read_grid(path, |c, _| match c {
        '.' => Some(Tile::Path),
        '#' => Some(Tile::Forest),
        '^' => Some(Tile::Slope(Direction::North)),
        '>' => Some(Tile::Slope(Direction::East)),
        'v' => Some(Tile::Slope(Direction::South)),
        '<' => Some(Tile::Slope(Direction::West)),
        _ => None,
    })?;
    Ok(TrailMap::new(grid)?)
}
