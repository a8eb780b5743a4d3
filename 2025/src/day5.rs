use std::{error, fmt::Display, ops::RangeInclusive, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidRange(String),
    InvalidId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRange(s) => write!(f, "Invalid fresh id range({}).", s),
            Error::InvalidId(s) => write!(f, "Invalid ingredient id({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    fresh_ranges: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl Inventory {
    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh_ranges.iter().any(|range| range.contains(&id))
    }

    pub fn fresh_available_n(&self) -> usize {
        self.available.iter().filter(|id| self.is_fresh(**id)).count()
    }

    /// Ranges sorted by start with overlapping and touching ones joined.
    pub fn merged_ranges(&self) -> Vec<RangeInclusive<u64>> {
        let mut ranges = self.fresh_ranges.clone();
        ranges.sort_by_key(|range| *range.start());

        let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    if range.end() > last.end() {
                        *last = *last.start()..=*range.end();
                    }
                }
                _ => merged.push(range),
            }
        }

        merged
    }

    pub fn fresh_id_n(&self) -> u64 {
        let merged = self.merged_ranges();
        log::debug!(
            "{} fresh range(s) merge into {}.",
            self.fresh_ranges.len(),
            merged.len()
        );
        merged
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .sum()
    }
}

#[derive(Debug, Default)]
pub struct InventoryBuilder {
    inventory: Inventory,
    in_ids: bool,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range lines come first, a blank line switches to ingredient ids.
    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        let line = line.trim();
        if line.is_empty() {
            self.in_ids = !self.inventory.fresh_ranges.is_empty();
            return Ok(());
        }

        if self.in_ids {
            let id = line
                .parse::<u64>()
                .map_err(|_| Error::InvalidId(line.to_string()))?;
            self.inventory.available.push(id);
        } else {
            let invalid = || Error::InvalidRange(line.to_string());
            let (start, end) = line.split_once('-').ok_or_else(invalid)?;
            let start = start.parse::<u64>().map_err(|_| invalid())?;
            let end = end.parse::<u64>().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            self.inventory.fresh_ranges.push(start..=end);
        }

        Ok(())
    }

    pub fn build(self) -> Inventory {
        self.inventory
    }
}

pub fn read_inventory<P: AsRef<Path>>(path: P) -> Result<Inventory> {
    let mut builder = InventoryBuilder::new();
    for (ind, line) in grid::read_lines(&path)?.iter().enumerate() {
        builder.add_line(line).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(builder.build())
}
