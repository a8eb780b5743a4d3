use std::{error, fmt::Display, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidBattery(char),
    TooFewBatteries(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBattery(c) => write!(f, "Invalid battery joltage({}).", c),
            Error::TooFewBatteries(have, need) => write!(
                f,
                "Bank has {} batteries, cannot turn on {}.",
                have, need
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank(Vec<u8>);

impl Bank {
    /// Largest number formed by `n` batteries kept in bank order.
    ///
    /// Each digit is the largest one that still leaves enough batteries
    /// after it, taking the leftmost on ties.
    pub fn max_joltage(&self, n: usize) -> Result<u64, Error> {
        if n > self.0.len() {
            return Err(Error::TooFewBatteries(self.0.len(), n));
        }

        let mut joltage = 0;
        let mut from = 0;
        for left_n in (0..n).rev() {
            let window = &self.0[from..(self.0.len() - left_n)];
            let (offset, digit) = window
                .iter()
                .enumerate()
                .fold((0, 0), |best, (ind, d)| if *d > best.1 { (ind, *d) } else { best });
            joltage = joltage * 10 + u64::from(digit);
            from += offset + 1;
        }

        Ok(joltage)
    }
}

impl TryFrom<&str> for Bank {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(Error::InvalidBattery(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Bank)
    }
}

pub fn total_joltage(banks: &[Bank], n: usize) -> Result<u64, Error> {
    banks.iter().map(|bank| bank.max_joltage(n)).sum()
}

pub fn read_banks<P: AsRef<Path>>(path: P) -> Result<Vec<Bank>> {
    grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            Bank::try_from(line.trim()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}
