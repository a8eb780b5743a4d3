use std::{error, fmt::Display, ops::RangeInclusive, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidRange(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRange(s) => write!(f, "Invalid id range({}).", s),
        }
    }
}

impl error::Error for Error {}

/// Which ids count as made of one repeated digit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Twice,
    AtLeastTwice,
}

impl Repetition {
    pub fn matches(&self, id: u64) -> bool {
        let digits = id.to_string();
        let len = digits.len();
        (1..=len / 2)
            .filter(|block_len| len % block_len == 0)
            .filter(|block_len| match self {
                Repetition::Twice => len / block_len == 2,
                Repetition::AtLeastTwice => true,
            })
            .any(|block_len| {
                let block = &digits.as_bytes()[..block_len];
                digits.as_bytes().chunks(block_len).all(|chunk| chunk == block)
            })
    }
}

pub fn invalid_id_sum(ranges: &[RangeInclusive<u64>], repetition: Repetition) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|id| repetition.matches(*id))
        .sum()
}

fn parse_range(text: &str) -> Result<RangeInclusive<u64>, Error> {
    let invalid = || Error::InvalidRange(text.to_string());
    let (start, end) = text.split_once('-').ok_or_else(invalid)?;
    let start = start.trim().parse::<u64>().map_err(|_| invalid())?;
    let end = end.trim().parse::<u64>().map_err(|_| invalid())?;
    Ok(start..=end)
}

/// Comma separated `a-b` ranges, possibly spread over several lines.
pub fn read_ranges<P: AsRef<Path>>(path: P) -> Result<Vec<RangeInclusive<u64>>> {
    let text = grid::read_lines(&path)?.concat();
    text.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            parse_range(s).with_context(|| {
                format!("Failed to parse range in given file({}).", path.as_ref().display())
            })
        })
        .collect()
}
