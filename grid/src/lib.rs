use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

pub mod search;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidTile(char, Position),
    LineOutOfRange(usize, Direction),
    LineLengthMismatch(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidTile(c, pos) => {
                write!(f, "Invalid character({}) for tile at {}.", c, pos)
            }
            Error::LineOutOfRange(index, dir) => {
                write!(f, "No line with index {} in direction {:?}.", index, dir)
            }
            Error::LineLengthMismatch(expect_len, this_len) => write!(
                f,
                "Expect line of length {}, given {}.",
                expect_len, this_len
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Step one tile towards `dir`, `None` when that leaves the top or left edge.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }

    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_counterclockwise(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

/// Rectangular grid of tiles stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(row_n: usize, col_n: usize, fill: T) -> Self {
        Self {
            tiles: vec![fill; row_n * col_n],
            row_n,
            col_n,
        }
    }

    /// Tiles along one line, ordered the way an observer moving towards `dir` meets them.
    ///
    /// East and west lines are rows, north and south lines are columns; `index`
    /// picks the row or column.
    pub fn extract_line(&self, index: usize, dir: Direction) -> Option<Vec<T>> {
        self.line_inds(index, dir)
            .map(|inds| inds.map(|ind| self.tiles[ind].clone()).collect())
    }

    /// Write `line` back in the same order [`Grid::extract_line`] reads it.
    pub fn set_line(&mut self, index: usize, dir: Direction, line: &[T]) -> Result<(), Error> {
        let expect_len = self.line_len(dir);
        if line.len() != expect_len {
            return Err(Error::LineLengthMismatch(expect_len, line.len()));
        }

        let inds = self
            .line_inds(index, dir)
            .ok_or(Error::LineOutOfRange(index, dir))?;
        for (ind, tile) in inds.zip(line) {
            self.tiles[ind] = tile.clone();
        }

        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).map(|ind| &self.tiles[ind])
    }

    pub fn tile_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).map(|ind| &mut self.tiles[ind])
    }

    /// Replace the tile at `pos`, returning the old one.
    pub fn set_tile(&mut self, pos: &Position, tile: T) -> Option<T> {
        self.tile_mut(pos)
            .map(|old_tile| std::mem::replace(old_tile, tile))
    }

    /// Index the grid as if it were tiled infinitely in every direction.
    pub fn wrapped_tile(&self, r: isize, c: isize) -> Option<&T> {
        if self.tiles.is_empty() {
            return None;
        }

        let r = r.rem_euclid(self.row_n as isize) as usize;
        let c = c.rem_euclid(self.col_n as isize) as usize;
        self.tiles.get(r * self.col_n + c)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.tiles.iter())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.tiles.chunks(self.col_n.max(1))
    }

    pub fn find_position<F>(&self, mut pred: F) -> Option<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.tiles()
            .find(|(_, tile)| pred(tile))
            .map(|(pos, _)| pos)
    }

    pub fn neighbors4(&self, pos: &Position) -> impl Iterator<Item = Position> + '_ {
        let pos = *pos;
        Direction::all_dirs()
            .iter()
            .filter_map(move |dir| pos.neighbor(*dir))
            .filter(move |next_pos| self.contains(next_pos))
    }

    /// All in-bounds positions around `pos`, diagonals included.
    pub fn neighbors8(&self, pos: &Position) -> impl Iterator<Item = Position> + '_ {
        static OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        let pos = *pos;
        OFFSETS
            .iter()
            .filter_map(move |(dr, dc)| pos.offset(*dr, *dc))
            .filter(move |next_pos| self.contains(next_pos))
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    /// Number of lines [`Grid::extract_line`] accepts for `dir`.
    pub fn line_n(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.col_n
        } else {
            self.row_n
        }
    }

    pub fn line_len(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.row_n
        } else {
            self.col_n
        }
    }

    fn line_inds(&self, index: usize, dir: Direction) -> Option<impl Iterator<Item = usize>> {
        if index >= self.line_n(dir) {
            return None;
        }

        let col_n = self.col_n as isize;
        let (start, stride) = match dir {
            Direction::East => (index as isize * col_n, 1),
            Direction::West => (index as isize * col_n + col_n - 1, -1),
            Direction::South => (index as isize, col_n),
            Direction::North => ((self.row_n as isize - 1) * col_n + index as isize, -col_n),
        };

        Some((0..self.line_len(dir) as isize).map(move |step| (start + stride * step) as usize))
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct GridBuilder<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    /// Append one row, `parse` turns each character into a tile and may reject it.
    pub fn add_row<F>(&mut self, text: &str, mut parse: F) -> Result<(), Error>
    where
        F: FnMut(char, &Position) -> Option<T>,
    {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            let tile = parse(c, &pos).ok_or(Error::InvalidTile(c, pos))?;
            self.tiles.push(tile);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn build(self) -> Grid<T> {
        Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}

/// Read a grid from `path`, skipping blank lines.
pub fn read_grid<P, T, F>(path: P, mut parse: F) -> Result<Grid<T>>
where
    P: AsRef<Path>,
    F: FnMut(char, &Position) -> Option<T>,
{
    let mut builder = GridBuilder::new();
    for (ind, line) in read_lines(&path)?.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        builder.add_row(&line, &mut parse).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}) as grid row.",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(builder.build())
}

pub fn read_char_grid<P: AsRef<Path>>(path: P) -> Result<Grid<char>> {
    read_grid(path, |c, _| Some(c))
}
