use std::{collections::BTreeSet, error, fmt::Display, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidLine(String),
    UnexpectedPresentIndex(usize, usize),
    ShapeRowBeforeHeader(String),
    EmptyPresent(usize),
    TooManyCounts(usize, usize),
    RegionTooWide(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLine(s) => write!(f, "Invalid line({}).", s),
            Error::UnexpectedPresentIndex(expect, given) => {
                write!(f, "Expect present {}, given {}.", expect, given)
            }
            Error::ShapeRowBeforeHeader(s) => {
                write!(f, "Found shape row({}) before any present header.", s)
            }
            Error::EmptyPresent(ind) => write!(f, "Present {} has no cell.", ind),
            Error::TooManyCounts(count_n, present_n) => write!(
                f,
                "Region lists {} present counts, only {} presents are known.",
                count_n, present_n
            ),
            Error::RegionTooWide(width) => write!(
                f,
                "Region width {} exceeds the supported {}.",
                width,
                u64::BITS
            ),
        }
    }
}

impl error::Error for Error {}

/// Occupied cells of a present shape, shifted so both minimum coordinates are 0.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Present(BTreeSet<(usize, usize)>);

impl Present {
    pub fn new(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let cells = cells.into_iter().collect::<Vec<_>>();
        let min_r = cells.iter().map(|(r, _)| *r).min().unwrap_or(0);
        let min_c = cells.iter().map(|(_, c)| *c).min().unwrap_or(0);
        Self(
            cells
                .into_iter()
                .map(|(r, c)| (r - min_r, c - min_c))
                .collect(),
        )
    }

    pub fn cell_n(&self) -> usize {
        self.0.len()
    }

    /// Side of the smallest square holding the shape.
    pub fn extent(&self) -> usize {
        self.0
            .iter()
            .map(|(r, c)| r.max(c) + 1)
            .max()
            .unwrap_or(0)
    }

    fn rotated(&self) -> Self {
        let extent = self.extent();
        Self::new(self.0.iter().map(|(r, c)| (*c, extent - 1 - r)))
    }

    fn flipped(&self) -> Self {
        let extent = self.extent();
        Self::new(self.0.iter().map(|(r, c)| (*r, extent - 1 - c)))
    }

    /// Distinct shapes under rotation and flipping.
    pub fn variants(&self) -> Vec<Present> {
        let mut variants = BTreeSet::new();
        let mut cur = self.clone();
        for _ in 0..2 {
            for _ in 0..4 {
                cur = cur.rotated();
                variants.insert(cur.clone());
            }
            cur = cur.flipped();
        }

        variants.into_iter().collect()
    }
}

/// One orientation as row bit masks, `anchor` is the column of its first cell in row 0.
#[derive(Debug, Clone)]
struct Placement {
    rows: Vec<u64>,
    anchor: usize,
}

impl From<&Present> for Placement {
    fn from(value: &Present) -> Self {
        let height = value.0.iter().map(|(r, _)| r + 1).max().unwrap_or(0);
        let mut rows = vec![0u64; height];
        for (r, c) in &value.0 {
            rows[*r] |= 1 << c;
        }
        let anchor = rows.first().map_or(0, |row| row.trailing_zeros() as usize);
        Self { rows, anchor }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    pub counts: Vec<usize>,
}

impl TryFrom<&str> for Region {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidLine(value.to_string());
        let (size, counts) = value.split_once(':').ok_or_else(invalid)?;
        let (width, height) = size.trim().split_once('x').ok_or_else(invalid)?;
        Ok(Self {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
            counts: counts
                .split_whitespace()
                .map(|s| s.parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?,
        })
    }
}

#[derive(Debug)]
pub struct TreeFarm {
    presents: Vec<Present>,
    regions: Vec<Region>,
}

impl TreeFarm {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn fitting_region_n(&self) -> Result<usize, Error> {
        let mut fit_n = 0;
        for region in &self.regions {
            if self.fits(region)? {
                fit_n += 1;
            }
        }

        Ok(fit_n)
    }

    /// Whether every listed present can be placed in the region without overlap.
    pub fn fits(&self, region: &Region) -> Result<bool, Error> {
        if region.counts.len() > self.presents.len() {
            return Err(Error::TooManyCounts(
                region.counts.len(),
                self.presents.len(),
            ));
        }

        let area = region.width * region.height;
        let needed = region
            .counts
            .iter()
            .zip(&self.presents)
            .map(|(count, present)| count * present.cell_n())
            .sum::<usize>();
        if needed > area {
            log::debug!(
                "{}x{}: {} cell(s) needed, rejected.",
                region.width,
                region.height,
                needed
            );
            return Ok(false);
        }

        let present_n = region.counts.iter().sum::<usize>();
        let cell = self
            .presents
            .iter()
            .map(Present::extent)
            .max()
            .unwrap_or(1)
            .max(1);
        if (region.width / cell) * (region.height / cell) >= present_n {
            log::debug!(
                "{}x{}: every present gets its own {}x{} cell, accepted.",
                region.width,
                region.height,
                cell,
                cell
            );
            return Ok(true);
        }

        if region.width > u64::BITS as usize {
            return Err(Error::RegionTooWide(region.width));
        }

        let mut packer = Packer {
            placements: self
                .presents
                .iter()
                .map(|present| present.variants().iter().map(Placement::from).collect())
                .collect(),
            counts: region.counts.clone(),
            board: vec![0; region.height],
            full_row: u64::MAX >> (u64::BITS as usize - region.width),
            skip_budget: area - needed,
        };
        let fits = packer.fill(0);
        log::debug!(
            "{}x{}: backtracking {}.",
            region.width,
            region.height,
            if fits { "found a packing" } else { "found no packing" }
        );
        Ok(fits)
    }
}

/// Fills the board in row-major order: the first empty cell either stays
/// empty, using up one unit of `skip_budget`, or holds the first cell of
/// some present.
struct Packer {
    placements: Vec<Vec<Placement>>,
    counts: Vec<usize>,
    board: Vec<u64>,
    full_row: u64,
    skip_budget: usize,
}

impl Packer {
    fn fill(&mut self, from_r: usize) -> bool {
        if self.counts.iter().all(|count| *count == 0) {
            return true;
        }

        let Some(r) = (from_r..self.board.len()).find(|r| self.board[*r] != self.full_row) else {
            return false;
        };
        let c = (!self.board[r] & self.full_row).trailing_zeros() as usize;

        for present_ind in 0..self.placements.len() {
            if self.counts.get(present_ind).copied().unwrap_or(0) == 0 {
                continue;
            }

            for placement_ind in 0..self.placements[present_ind].len() {
                let Some(masks) = self.masks_at(present_ind, placement_ind, r, c) else {
                    continue;
                };

                self.toggle(r, &masks);
                self.counts[present_ind] -= 1;
                if self.fill(r) {
                    return true;
                }
                self.counts[present_ind] += 1;
                self.toggle(r, &masks);
            }
        }

        if self.skip_budget > 0 {
            self.skip_budget -= 1;
            self.board[r] |= 1 << c;
            if self.fill(r) {
                return true;
            }
            self.board[r] &= !(1 << c);
            self.skip_budget += 1;
        }

        false
    }

    /// Row masks of the placement with its anchor on `(r, c)`, if it fits.
    fn masks_at(&self, present_ind: usize, placement_ind: usize, r: usize, c: usize) -> Option<Vec<u64>> {
        let placement = &self.placements[present_ind][placement_ind];
        let shift = c.checked_sub(placement.anchor)?;
        if r + placement.rows.len() > self.board.len() {
            return None;
        }

        let masks = placement
            .rows
            .iter()
            .map(|row| row.checked_shl(shift as u32).filter(|m| m >> shift == *row))
            .collect::<Option<Vec<_>>>()?;
        let fits = masks
            .iter()
            .zip(&self.board[r..])
            .all(|(mask, board_row)| mask & !self.full_row == 0 && mask & board_row == 0);
        fits.then_some(masks)
    }

    fn toggle(&mut self, r: usize, masks: &[u64]) {
        for (board_row, mask) in self.board[r..].iter_mut().zip(masks) {
            *board_row ^= mask;
        }
    }
}

#[derive(Debug, Default)]
pub struct TreeFarmBuilder {
    presents: Vec<Vec<(usize, usize)>>,
    cur_row: usize,
    regions: Vec<Region>,
}

impl TreeFarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if line.contains('x') {
            self.regions.push(Region::try_from(line)?);
        } else if let Some(index) = line.strip_suffix(':') {
            let index = index
                .parse::<usize>()
                .map_err(|_| Error::InvalidLine(line.to_string()))?;
            if index != self.presents.len() {
                return Err(Error::UnexpectedPresentIndex(self.presents.len(), index));
            }
            self.presents.push(Vec::new());
            self.cur_row = 0;
        } else {
            let cells = self
                .presents
                .last_mut()
                .ok_or_else(|| Error::ShapeRowBeforeHeader(line.to_string()))?;
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '#' => cells.push((self.cur_row, c)),
                    '.' => (),
                    _ => return Err(Error::InvalidLine(line.to_string())),
                }
            }
            self.cur_row += 1;
        }

        Ok(())
    }

    pub fn build(self) -> Result<TreeFarm, Error> {
        if let Some(ind) = self.presents.iter().position(Vec::is_empty) {
            return Err(Error::EmptyPresent(ind));
        }

        Ok(TreeFarm {
            presents: self.presents.into_iter().map(Present::new).collect(),
            regions: self.regions,
        })
    }
}

pub fn read_tree_farm<P: AsRef<Path>>(path: P) -> Result<TreeFarm> {
    let mut builder = TreeFarmBuilder::new();
    for (ind, line) in grid::read_lines(&path)?.iter().enumerate() {
        builder.add_line(line).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(builder.build()?)
}
