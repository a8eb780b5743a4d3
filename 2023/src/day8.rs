use std::{collections::HashMap, error, fmt::Display, path::Path};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    EmptyInstructions,
    InvalidInstruction(char),
    InvalidNodeLine(String),
    DuplicateNode(String),
    UnknownNode(String),
    NeverEnds(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInstructions => write!(f, "No left/right instruction found."),
            Error::InvalidInstruction(c) => write!(f, "Invalid instruction character({}).", c),
            Error::InvalidNodeLine(s) => write!(f, "Invalid node line({}).", s),
            Error::DuplicateNode(n) => write!(f, "Node {} is defined more than once.", n),
            Error::UnknownNode(n) => write!(f, "Reference to unknown node {}.", n),
            Error::NeverEnds(n) => write!(f, "Walk from node {} never reaches an end node.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl TryFrom<char> for Turn {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => Err(Error::InvalidInstruction(other)),
        }
    }
}

#[derive(Debug)]
pub struct Network {
    turns: Vec<Turn>,
    nodes: HashMap<String, (String, String)>,
}

impl Network {
    /// Steps from `start` until the first node accepted by `is_end`, at least one step is taken.
    pub fn steps_from<F>(&self, start: &str, mut is_end: F) -> Result<usize, Error>
    where
        F: FnMut(&str) -> bool,
    {
        // A walk that has not ended after every (node, turn index) pair was seen is in a loop.
        let step_limit = self.nodes.len() * self.turns.len();
        let mut cur = start;
        for step_n in 0..step_limit {
            let (left, right) = self
                .nodes
                .get(cur)
                .ok_or_else(|| Error::UnknownNode(cur.to_string()))?;
            cur = match self.turns[step_n % self.turns.len()] {
                Turn::Left => left.as_str(),
                Turn::Right => right.as_str(),
            };
            if is_end(cur) {
                return Ok(step_n + 1);
            }
        }

        Err(Error::NeverEnds(start.to_string()))
    }

    pub fn steps_to_zzz(&self) -> Result<usize, Error> {
        self.steps_from("AAA", |n| n == "ZZZ")
    }

    /// Every walker starting on a `..A` node reaches a `..Z` node at the same step.
    pub fn ghost_steps(&self) -> Result<usize, Error> {
        let mut starts = self
            .nodes
            .keys()
            .filter(|n| n.ends_with('A'))
            .collect::<Vec<_>>();
        starts.sort();

        let mut steps = 1;
        for start in starts {
            let walker_steps = self.steps_from(start, |n| n.ends_with('Z'))?;
            log::debug!("Walker from {} ends after {} step(s).", start, walker_steps);
            steps = lcm(steps, walker_steps);
        }

        Ok(steps)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[derive(Debug, Default)]
pub struct NetworkBuilder {
    turns: Vec<Turn>,
    nodes: HashMap<String, (String, String)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) -> Result<(), Error> {
        static NODE_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\w{3}) = \((\w{3}), (\w{3})\)$").unwrap());

        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if self.turns.is_empty() {
            self.turns = line
                .chars()
                .map(Turn::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(());
        }

        let caps = NODE_REGEX
            .captures(line)
            .ok_or_else(|| Error::InvalidNodeLine(line.to_string()))?;
        let name = caps[1].to_string();
        if self.nodes.contains_key(&name) {
            return Err(Error::DuplicateNode(name));
        }
        self.nodes
            .insert(name, (caps[2].to_string(), caps[3].to_string()));
        Ok(())
    }

    pub fn build(self) -> Result<Network, Error> {
        if self.turns.is_empty() {
            return Err(Error::EmptyInstructions);
        }

        Ok(Network {
            turns: self.turns,
            nodes: self.nodes,
        })
    }
}

pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    let mut builder = NetworkBuilder::new();
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
