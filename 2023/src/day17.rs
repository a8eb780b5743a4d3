use std::path::Path;

use anyhow::Result;
use grid::{search, Direction, Grid, Position};

/// How many blocks in a row a crucible must and may move before turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrucibleRules {
    pub min_straight: usize,
    pub max_straight: usize,
}

impl CrucibleRules {
    pub const NORMAL: Self = Self {
        min_straight: 1,
        max_straight: 3,
    };
    pub const ULTRA: Self = Self {
        min_straight: 4,
        max_straight: 10,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Position,
    dir: Option<Direction>,
    straight_n: usize,
}

#[derive(Debug)]
pub struct HeatMap(Grid<usize>);

impl HeatMap {
    /// Least heat loss from the top-left to the bottom-right block.
    pub fn min_heat_loss(&self, rules: CrucibleRules) -> Option<usize> {
        let grid = &self.0;
        if grid.row_n() == 0 || grid.col_n() == 0 {
            return None;
        }

        let end = Position::new(grid.row_n() - 1, grid.col_n() - 1);
        let start = Crucible {
            pos: Position::new(0, 0),
            dir: None,
            straight_n: 0,
        };
        search::dijkstra(
            [(start, 0)],
            |crucible| self.moves(crucible, rules),
            |crucible| {
                crucible.pos == end
                    && (crucible.dir.is_none() || crucible.straight_n >= rules.min_straight)
            },
        )
        .map(|(_, cost)| cost)
    }

    fn moves(&self, crucible: &Crucible, rules: CrucibleRules) -> Vec<(Crucible, usize)> {
        Direction::all_dirs()
            .iter()
            .filter_map(|dir| {
                let straight_n = match crucible.dir {
                    Some(cur_dir) if cur_dir == *dir => crucible.straight_n + 1,
                    Some(cur_dir) if cur_dir.reverse() == *dir => return None,
                    Some(_) if crucible.straight_n < rules.min_straight => return None,
                    _ => 1,
                };
                if straight_n > rules.max_straight {
                    return None;
                }

                let pos = crucible.pos.neighbor(*dir)?;
                let heat = *self.0.tile(&pos)?;
                Some((
                    Crucible {
                        pos,
                        dir: Some(*dir),
                        straight_n,
                    },
                    heat,
                ))
            })
            .collect()
    }
}

pub fn read_heat_map<P: AsRef<Path>>(path: P) -> Result<HeatMap> {
    let grid = grid::read_grid(path, |c, _| c.to_digit(10).map(|d| d as usize))?;
    Ok(HeatMap(grid))
}
