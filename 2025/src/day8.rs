use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidBox(String),
    TooFewCircuits(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBox(s) => write!(f, "Invalid junction box position({}).", s),
            Error::TooFewCircuits(n) => {
                write!(f, "Expect at least 3 circuits, only {} left.", n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct ConnectionCLIArgs {
    pub input_path: PathBuf,
    /// How many of the closest box pairs to connect.
    #[arg(default_value_t = 1000)]
    pub pair_n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionBox {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl JunctionBox {
    pub fn squared_distance(&self, other: &JunctionBox) -> u64 {
        [self.x - other.x, self.y - other.y, self.z - other.z]
            .iter()
            .map(|d| d.unsigned_abs().pow(2))
            .sum()
    }
}

impl TryFrom<&str> for JunctionBox {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let coords = value
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidBox(value.to_string()))?;
        match coords[..] {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(Error::InvalidBox(value.to_string())),
        }
    }
}

/// Union-find over box indices, union by rank with path compression.
#[derive(Debug, Clone)]
pub struct Circuits {
    parents: Vec<usize>,
    ranks: Vec<u8>,
    sizes: Vec<usize>,
    circuit_n: usize,
}

impl Circuits {
    pub fn new(box_n: usize) -> Self {
        Self {
            parents: (0..box_n).collect(),
            ranks: vec![0; box_n],
            sizes: vec![1; box_n],
            circuit_n: box_n,
        }
    }

    pub fn find(&mut self, ind: usize) -> usize {
        let mut root = ind;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut cur = ind;
        while self.parents[cur] != root {
            let next = self.parents[cur];
            self.parents[cur] = root;
            cur = next;
        }

        root
    }

    /// Returns false if both boxes were already in one circuit.
    pub fn join(&mut self, a: usize, b: usize) -> bool {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        if self.ranks[root_a] < self.ranks[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parents[root_b] = root_a;
        self.sizes[root_a] += self.sizes[root_b];
        if self.ranks[root_a] == self.ranks[root_b] {
            self.ranks[root_a] += 1;
        }
        self.circuit_n -= 1;

        true
    }

    pub fn circuit_n(&self) -> usize {
        self.circuit_n
    }

    /// Sizes of all circuits, largest first.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = (0..self.parents.len())
            .filter(|ind| self.parents[*ind] == *ind)
            .map(|ind| self.sizes[ind])
            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<JunctionBox>,
    /// Every box pair, closest first.
    pairs: Vec<(usize, usize)>,
}

impl Playground {
    pub fn new(boxes: Vec<JunctionBox>) -> Self {
        let mut pairs = (0..boxes.len())
            .flat_map(|a| ((a + 1)..boxes.len()).map(move |b| (a, b)))
            .map(|(a, b)| (boxes[a].squared_distance(&boxes[b]), a, b))
            .collect::<Vec<_>>();
        pairs.sort_by_key(|(dist, _, _)| *dist);

        Self {
            pairs: pairs.into_iter().map(|(_, a, b)| (a, b)).collect(),
            boxes,
        }
    }

    /// Product of the three largest circuit sizes after connecting the `pair_n` closest pairs.
    ///
    /// A pair already in one circuit still uses up a connection.
    pub fn largest_circuits_product(&self, pair_n: usize) -> Result<usize, Error> {
        let mut circuits = Circuits::new(self.boxes.len());
        for (a, b) in self.pairs.iter().take(pair_n) {
            circuits.join(*a, *b);
        }

        let sizes = circuits.sizes();
        log::debug!("Circuit sizes after {} connection(s): {:?}.", pair_n, sizes);
        match sizes[..] {
            [a, b, c, ..] => Ok(a * b * c),
            _ => Err(Error::TooFewCircuits(sizes.len())),
        }
    }

    /// Product of the X coordinates of the pair whose connection leaves a single circuit.
    pub fn last_connection_product(&self) -> Option<i64> {
        let mut circuits = Circuits::new(self.boxes.len());
        for (ind, (a, b)) in self.pairs.iter().enumerate() {
            if circuits.join(*a, *b) && circuits.circuit_n() == 1 {
                log::debug!("Single circuit after {} connection(s).", ind + 1);
                return Some(self.boxes[*a].x * self.boxes[*b].x);
            }
        }

        None
    }
}

pub fn read_playground<P: AsRef<Path>>(path: P) -> Result<Playground> {
    let boxes = grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            JunctionBox::try_from(line.trim()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Playground::new(boxes))
}
