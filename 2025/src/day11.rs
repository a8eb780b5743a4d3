use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    path::Path,
};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidLine(String),
    DuplicateDevice(String),
    Cycle(String),
    TooManyRequired(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLine(s) => write!(f, "Invalid device line({}).", s),
            Error::DuplicateDevice(d) => write!(f, "Device {} is listed more than once.", d),
            Error::Cycle(d) => write!(f, "Found a loop through device {}.", d),
            Error::TooManyRequired(n) => write!(f, "Can't track {} required devices.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Default)]
pub struct Reactor {
    outputs: HashMap<String, Vec<String>>,
}

impl Reactor {
    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        let (name, outputs) = line
            .split_once(':')
            .ok_or_else(|| Error::InvalidLine(line.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidLine(line.to_string()));
        }
        if self.outputs.contains_key(name) {
            return Err(Error::DuplicateDevice(name.to_string()));
        }

        self.outputs.insert(
            name.to_string(),
            outputs.split_whitespace().map(str::to_string).collect(),
        );
        Ok(())
    }

    /// Number of distinct paths from `from` to `to` passing through every device in `required`.
    pub fn path_n(&self, from: &str, to: &str, required: &[&str]) -> Result<u64, Error> {
        if required.len() >= u32::BITS as usize {
            return Err(Error::TooManyRequired(required.len()));
        }

        let mut counter = PathCounter {
            reactor: self,
            to,
            required,
            cache: HashMap::new(),
            on_path: HashSet::new(),
        };
        let count = counter.count(from, 0)?;
        log::debug!(
            "{} path(s) from {} to {}, {} state(s) cached.",
            count,
            from,
            to,
            counter.cache.len()
        );
        Ok(count)
    }
}

struct PathCounter<'a> {
    reactor: &'a Reactor,
    to: &'a str,
    required: &'a [&'a str],
    cache: HashMap<(&'a str, u32), u64>,
    on_path: HashSet<&'a str>,
}

impl<'a> PathCounter<'a> {
    /// `seen` has bit `i` set once `required[i]` is behind us.
    fn count(&mut self, device: &'a str, seen: u32) -> Result<u64, Error> {
        let seen = self
            .required
            .iter()
            .enumerate()
            .filter(|(_, name)| **name == device)
            .fold(seen, |mask, (ind, _)| mask | (1 << ind));
        if device == self.to {
            let all_seen = (1u32 << self.required.len()) - 1;
            return Ok(u64::from(seen == all_seen));
        }
        if let Some(count) = self.cache.get(&(device, seen)) {
            return Ok(*count);
        }
        if !self.on_path.insert(device) {
            return Err(Error::Cycle(device.to_string()));
        }

        let mut count = 0;
        let reactor = self.reactor;
        for next in reactor.outputs.get(device).into_iter().flatten() {
            count += self.count(next, seen)?;
        }

        self.on_path.remove(device);
        self.cache.insert((device, seen), count);
        Ok(count)
    }
}

pub fn read_reactor<P: AsRef<Path>>(path: P) -> Result<Reactor> {
    let mut reactor = Reactor::default();
    for (ind, line) in grid::read_lines(&path)?.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        reactor.add_line(line).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(reactor)
}
