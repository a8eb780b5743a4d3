use std::path::Path;

use anyhow::Result;
use grid::{Grid, Position};

/// A roll is accessible with fewer than this many rolls around it.
const CROWDED_NEIGHBOR_N: usize = 4;

#[derive(Debug, Clone)]
pub struct PaperRolls(Grid<bool>);

impl PaperRolls {
    pub fn accessible_rolls(&self) -> Vec<Position> {
        self.0
            .tiles()
            .filter(|(_, is_roll)| **is_roll)
            .map(|(pos, _)| pos)
            .filter(|pos| self.roll_neighbor_n(pos) < CROWDED_NEIGHBOR_N)
            .collect()
    }

    /// Remove accessible rolls round by round until none is left, returns the removed count.
    pub fn remove_accessible(&mut self) -> usize {
        let mut removed_n = 0;
        let mut round_n = 0;
        loop {
            let accessible = self.accessible_rolls();
            if accessible.is_empty() {
                break;
            }

            round_n += 1;
            removed_n += accessible.len();
            for pos in &accessible {
                self.0.set_tile(pos, false);
            }
        }

        log::debug!("Removed {} roll(s) in {} round(s).", removed_n, round_n);
        removed_n
    }

    fn roll_neighbor_n(&self, pos: &Position) -> usize {
        self.0
            .neighbors8(pos)
            .filter(|next| self.0.tile(next).copied().unwrap_or(false))
            .count()
    }
}

pub fn read_rolls<P: AsRef<Path>>(path: P) -> Result<PaperRolls> {
    let grid = grid::read_grid(path, |c, _| match c {
        '@' => Some(true),
        '.' => Some(false),
        _ => None,
    })?;
    Ok(PaperRolls(grid))
}
