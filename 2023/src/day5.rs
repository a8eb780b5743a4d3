use std::{collections::HashMap, error, fmt::Display, ops::Range, path::Path};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidSeedsLine(String),
    InvalidMapHeader(String),
    InvalidRangeLine(String),
    RangeBeforeHeader(String),
    DuplicateMap(String),
    MissingMap(String),
    CyclicMaps(String),
    UnpairedSeed(u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSeedsLine(s) => write!(f, "Invalid seeds line({}).", s),
            Error::InvalidMapHeader(s) => write!(f, "Invalid map header({}).", s),
            Error::InvalidRangeLine(s) => write!(f, "Invalid map range line({}).", s),
            Error::RangeBeforeHeader(s) => {
                write!(f, "Found map range({}) before any map header.", s)
            }
            Error::DuplicateMap(c) => write!(f, "Found more than one map from category {}.", c),
            Error::MissingMap(c) => write!(f, "No map from category {}.", c),
            Error::CyclicMaps(c) => write!(f, "Map chain loops back to category {}.", c),
            Error::UnpairedSeed(s) => write!(f, "Seed range starting at {} has no length.", s),
        }
    }
}

impl error::Error for Error {}

const START_CATEGORY: &str = "seed";
const END_CATEGORY: &str = "location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    dest_start: u64,
    src_start: u64,
    len: u64,
}

impl MapRange {
    pub fn new(dest_start: u64, src_start: u64, len: u64) -> Self {
        Self {
            dest_start,
            src_start,
            len,
        }
    }

    pub fn map(&self, id: u64) -> Option<u64> {
        if id >= self.src_start && id - self.src_start < self.len {
            Some(self.dest_start + (id - self.src_start))
        } else {
            None
        }
    }
}

impl TryFrom<&str> for MapRange {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let nums = value
            .split_whitespace()
            .map(|s| s.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidRangeLine(value.to_string()))?;
        match nums[..] {
            [dest_start, src_start, len] => Ok(Self::new(dest_start, src_start, len)),
            _ => Err(Error::InvalidRangeLine(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryMap {
    dest: String,
    ranges: Vec<MapRange>,
}

impl CategoryMap {
    /// Ids outside every range keep their value.
    pub fn map(&self, id: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.map(id))
            .unwrap_or(id)
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    maps: HashMap<String, CategoryMap>,
}

impl Almanac {
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Maps from `seed` to `location`, in the order they apply.
    pub fn map_chain(&self) -> Result<Vec<&CategoryMap>, Error> {
        let mut chain = Vec::new();
        let mut category = START_CATEGORY;
        while category != END_CATEGORY {
            if chain.len() > self.maps.len() {
                return Err(Error::CyclicMaps(category.to_string()));
            }

            let map = self
                .maps
                .get(category)
                .ok_or_else(|| Error::MissingMap(category.to_string()))?;
            chain.push(map);
            category = &map.dest;
        }

        Ok(chain)
    }

    pub fn lowest_location(&self) -> Result<u64, Error> {
        let chain = self.map_chain()?;
        Ok(self
            .seeds
            .iter()
            .map(|seed| location_of(&chain, *seed))
            .min()
            .unwrap_or(u64::MAX))
    }

    /// Seeds taken as `start len` pairs, every id in every range is mapped.
    pub fn lowest_location_of_ranges(&self) -> Result<u64, Error> {
        let chain = self.map_chain()?;
        let seed_ranges = self.seed_ranges()?;
        let worker_n = rayon::current_num_threads();
        let packages = seed_ranges
            .iter()
            .flat_map(|range| work_packages(range.clone(), worker_n))
            .collect::<Vec<_>>();
        log::debug!(
            "Split {} seed range(s) into {} work package(s) for {} worker(s).",
            seed_ranges.len(),
            packages.len(),
            worker_n
        );
        for package in &packages {
            log::debug!("Work package {:?}.", package);
        }

        Ok(packages
            .into_par_iter()
            .map(|package| {
                package
                    .map(|seed| location_of(&chain, seed))
                    .min()
                    .unwrap_or(u64::MAX)
            })
            .min()
            .unwrap_or(u64::MAX))
    }

    fn seed_ranges(&self) -> Result<Vec<Range<u64>>, Error> {
        self.seeds
            .chunks(2)
            .map(|pair| match pair {
                [start, len] => Ok(*start..(*start + *len)),
                _ => Err(Error::UnpairedSeed(pair[0])),
            })
            .collect()
    }
}

fn location_of(chain: &[&CategoryMap], seed: u64) -> u64 {
    chain.iter().fold(seed, |id, map| map.map(id))
}

/// One package per worker, the last one takes the remainder.
pub fn work_packages(range: Range<u64>, worker_n: usize) -> Vec<Range<u64>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 {
        return Vec::new();
    }

    let worker_n = (worker_n.max(1) as u64).min(len);
    let batch = (len / worker_n).max(1);
    (0..worker_n)
        .map(|i| {
            let start = range.start + i * batch;
            let end = if i + 1 == worker_n {
                range.end
            } else {
                start + batch
            };
            start..end
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct AlmanacBuilder {
    seeds: Option<Vec<u64>>,
    maps: HashMap<String, CategoryMap>,
    cur_src: Option<String>,
}

impl AlmanacBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        static HEADER_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\w+)-to-(\w+) map:$").unwrap());

        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if self.seeds.is_none() {
            let seeds = line
                .strip_prefix("seeds:")
                .ok_or_else(|| Error::InvalidSeedsLine(line.to_string()))?
                .split_whitespace()
                .map(|s| s.parse::<u64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| Error::InvalidSeedsLine(line.to_string()))?;
            self.seeds = Some(seeds);
            return Ok(());
        }

        if line.ends_with("map:") {
            let caps = HEADER_REGEX
                .captures(line)
                .ok_or_else(|| Error::InvalidMapHeader(line.to_string()))?;
            let src = caps[1].to_string();
            if self.maps.contains_key(&src) {
                return Err(Error::DuplicateMap(src));
            }

            self.maps.insert(
                src.clone(),
                CategoryMap {
                    dest: caps[2].to_string(),
                    ranges: Vec::new(),
                },
            );
            self.cur_src = Some(src);
            return Ok(());
        }

        let map = self
            .cur_src
            .as_ref()
            .and_then(|src| self.maps.get_mut(src))
            .ok_or_else(|| Error::RangeBeforeHeader(line.to_string()))?;
        map.ranges.push(MapRange::try_from(line)?);
        Ok(())
    }

    pub fn build(self) -> Almanac {
        Almanac {
            seeds: self.seeds.unwrap_or_default(),
            maps: self.maps,
        }
    }
}

pub fn read_almanac<P: AsRef<Path>>(path: P) -> Result<Almanac> {
    let mut builder = AlmanacBuilder::new();
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
