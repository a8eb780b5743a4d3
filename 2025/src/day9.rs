use std::{error, fmt::Display, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidTile(String),
    DiagonalEdge(RedTile, RedTile),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTile(s) => write!(f, "Invalid red tile position({}).", s),
            Error::DiagonalEdge(a, b) => write!(
                f,
                "Red tiles ({}, {}) and ({}, {}) are not on one row or column.",
                a.x, a.y, b.x, b.y
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedTile {
    pub x: i64,
    pub y: i64,
}

impl TryFrom<&str> for RedTile {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidTile(value.to_string());
        let (x, y) = value.split_once(',').ok_or_else(invalid)?;
        Ok(Self {
            x: x.trim().parse().map_err(|_| invalid())?,
            y: y.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Axis-aligned box spanned by two red tiles, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x1: i64,
    x2: i64,
    y1: i64,
    y2: i64,
}

impl Rect {
    fn new(a: &RedTile, b: &RedTile) -> Self {
        Self {
            x1: a.x.min(b.x),
            x2: a.x.max(b.x),
            y1: a.y.min(b.y),
            y2: a.y.max(b.y),
        }
    }

    fn area(&self) -> u64 {
        (self.x2 - self.x1 + 1) as u64 * (self.y2 - self.y1 + 1) as u64
    }

    /// Whether the edge passes through the open interior, or cuts all the way across.
    ///
    /// The full cut catches one-row (one-column) boxes, which have no open interior.
    fn is_crossed_by(&self, a: &RedTile, b: &RedTile) -> bool {
        let edge = Rect::new(a, b);
        if edge.x1 == edge.x2 {
            self.x1 < edge.x1
                && edge.x1 < self.x2
                && (edge.y1.max(self.y1) < edge.y2.min(self.y2)
                    || (edge.y1 <= self.y1 && edge.y2 >= self.y2))
        } else {
            self.y1 < edge.y1
                && edge.y1 < self.y2
                && (edge.x1.max(self.x1) < edge.x2.min(self.x2)
                    || (edge.x1 <= self.x1 && edge.x2 >= self.x2))
        }
    }
}

/// Closed loop of red tiles, consecutive ones joined by green tiles.
#[derive(Debug)]
pub struct Floor {
    red_tiles: Vec<RedTile>,
}

impl Floor {
    pub fn new(red_tiles: Vec<RedTile>) -> Result<Self, Error> {
        let floor = Self { red_tiles };
        if let Some((a, b)) = floor.edges().find(|(a, b)| a.x != b.x && a.y != b.y) {
            return Err(Error::DiagonalEdge(*a, *b));
        }

        Ok(floor)
    }

    pub fn largest_rect_area(&self) -> u64 {
        self.rects().map(|rect| rect.area()).max().unwrap_or(0)
    }

    /// Largest rectangle made of red and green tiles only.
    pub fn largest_inner_rect_area(&self) -> u64 {
        self.rects()
            .filter(|rect| self.is_inner(rect))
            .map(|rect| rect.area())
            .max()
            .unwrap_or(0)
    }

    /// Whether the rectangle with corners `a` and `b` holds only red and green tiles.
    pub fn is_inner_rect(&self, a: &RedTile, b: &RedTile) -> bool {
        self.is_inner(&Rect::new(a, b))
    }

    fn is_inner(&self, rect: &Rect) -> bool {
        !self.edges().any(|(a, b)| rect.is_crossed_by(a, b))
            && self.contains_doubled(rect.x1 + rect.x2, rect.y1 + rect.y2)
    }

    fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.red_tiles.iter().enumerate().flat_map(move |(ind, a)| {
            self.red_tiles[(ind + 1)..]
                .iter()
                .map(move |b| Rect::new(a, b))
        })
    }

    fn edges(&self) -> impl Iterator<Item = (&RedTile, &RedTile)> + '_ {
        self.red_tiles
            .iter()
            .zip(self.red_tiles.iter().cycle().skip(1))
    }

    /// Point-in-polygon test on doubled coordinates so centers of tiles pairs stay integral.
    ///
    /// Points on the loop count as inside.
    fn contains_doubled(&self, x: i64, y: i64) -> bool {
        let on_loop = self.edges().any(|(a, b)| {
            let edge = Rect::new(a, b);
            (edge.x1 * 2..=edge.x2 * 2).contains(&x) && (edge.y1 * 2..=edge.y2 * 2).contains(&y)
        });
        if on_loop {
            return true;
        }

        let crossing_n = self
            .edges()
            .filter(|(a, b)| a.x == b.x && a.x * 2 > x)
            .filter(|(a, b)| (a.y.min(b.y) * 2..a.y.max(b.y) * 2).contains(&y))
            .count();
        crossing_n % 2 == 1
    }
}

pub fn read_floor<P: AsRef<Path>>(path: P) -> Result<Floor> {
    let red_tiles = grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            RedTile::try_from(line.trim()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Floor::new(red_tiles)?)
}
