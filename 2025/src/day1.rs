use std::{error, fmt::Display, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidRotation(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRotation(s) => write!(f, "Invalid rotation({}).", s),
        }
    }
}

impl error::Error for Error {}

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

impl TryFrom<&str> for Rotation {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidRotation(value.to_string());
        let (dir, amount) = value.split_at_checked(1).ok_or_else(invalid)?;
        let amount = amount.parse::<u32>().map_err(|_| invalid())?;
        match dir {
            "L" => Ok(Rotation::Left(amount)),
            "R" => Ok(Rotation::Right(amount)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial(u32);

impl Default for Dial {
    fn default() -> Self {
        Self(DIAL_START)
    }
}

impl Dial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Turn the dial, returning how many clicks pointed it at 0 on the way.
    pub fn rotate(&mut self, rotation: Rotation) -> u32 {
        match rotation {
            Rotation::Right(amount) => {
                // Full turns first so the sum stays below two dial sizes.
                let rest = self.0 + amount % DIAL_SIZE;
                self.0 = rest % DIAL_SIZE;
                amount / DIAL_SIZE + rest / DIAL_SIZE
            }
            Rotation::Left(amount) => {
                // Leaving 0 does not count, the next zero is a full turn away.
                let to_zero = if self.0 == 0 { DIAL_SIZE } else { self.0 };
                let zero_n = if amount >= to_zero {
                    (amount - to_zero) / DIAL_SIZE + 1
                } else {
                    0
                };
                self.0 = (self.0 + DIAL_SIZE - amount % DIAL_SIZE) % DIAL_SIZE;
                zero_n
            }
        }
    }
}

/// Rotations after which the dial rests on 0.
pub fn resting_zero_n(rotations: &[Rotation]) -> usize {
    let mut dial = Dial::new();
    rotations
        .iter()
        .filter(|rotation| {
            dial.rotate(**rotation);
            dial.value() == 0
        })
        .count()
}

/// Every click that points the dial at 0, during or at the end of a rotation.
pub fn passing_zero_n(rotations: &[Rotation]) -> u64 {
    let mut dial = Dial::new();
    rotations
        .iter()
        .map(|rotation| u64::from(dial.rotate(*rotation)))
        .sum()
}

pub fn read_rotations<P: AsRef<Path>>(path: P) -> Result<Vec<Rotation>> {
    grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            Rotation::try_from(line.trim()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}
