use std::{error, fmt::Display, path::Path};

use anyhow::Result;

#[derive(Debug)]
pub enum Error {
    InvalidStep(String),
    InvalidFocalLength(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStep(s) => write!(f, "Invalid initialization step({}).", s),
            Error::InvalidFocalLength(s) => write!(f, "Invalid focal length in step({}).", s),
        }
    }
}

impl error::Error for Error {}

const BOX_N: usize = 256;

pub fn hash(text: &str) -> usize {
    text.bytes()
        .fold(0, |cur, b| (cur + usize::from(b)) * 17 % BOX_N)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Remove,
    Insert(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    text: String,
    label: String,
    op: Operation,
}

impl Step {
    pub fn hash(&self) -> usize {
        hash(&self.text)
    }
}

impl TryFrom<&str> for Step {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (label, op) = if let Some(label) = value.strip_suffix('-') {
            (label, Operation::Remove)
        } else if let Some((label, focal)) = value.split_once('=') {
            let focal = focal
                .parse::<usize>()
                .map_err(|_| Error::InvalidFocalLength(value.to_string()))?;
            (label, Operation::Insert(focal))
        } else {
            return Err(Error::InvalidStep(value.to_string()));
        };

        if label.is_empty() {
            return Err(Error::InvalidStep(value.to_string()));
        }

        Ok(Self {
            text: value.to_string(),
            label: label.to_string(),
            op,
        })
    }
}

#[derive(Debug)]
pub struct LensBoxes(Vec<Vec<(String, usize)>>);

impl Default for LensBoxes {
    fn default() -> Self {
        Self(vec![Vec::new(); BOX_N])
    }
}

impl LensBoxes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, step: &Step) {
        let lenses = &mut self.0[hash(&step.label)];
        let slot = lenses.iter().position(|(label, _)| *label == step.label);
        match (&step.op, slot) {
            (Operation::Remove, Some(ind)) => {
                lenses.remove(ind);
            }
            (Operation::Remove, None) => (),
            (Operation::Insert(focal), Some(ind)) => lenses[ind].1 = *focal,
            (Operation::Insert(focal), None) => lenses.push((step.label.clone(), *focal)),
        }
    }

    pub fn focusing_power(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(box_ind, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot_ind, (_, focal))| (box_ind + 1) * (slot_ind + 1) * focal)
            })
            .sum()
    }
}

/// Steps are comma separated, line breaks inside the sequence are ignored.
pub fn read_steps<P: AsRef<Path>>(path: P) -> Result<Vec<Step>> {
    let text = grid::read_lines(&path)?.concat();
    Ok(text
        .split(',')
        .filter(|s| !s.is_empty())
        .map(Step::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}
