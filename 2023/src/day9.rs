use std::{error, fmt::Display, path::Path};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidValue(String),
    EmptyHistory,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidValue(s) => write!(f, "Invalid history value({}).", s),
            Error::EmptyHistory => write!(f, "History has no value."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History(Vec<i64>);

impl History {
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Value after the last one, found by summing the last entries of every difference row.
    pub fn next_value(&self) -> i64 {
        difference_rows(&self.0)
            .iter()
            .filter_map(|row| row.last())
            .sum()
    }

    /// Value before the first one.
    pub fn prev_value(&self) -> i64 {
        difference_rows(&self.0)
            .iter()
            .rev()
            .filter_map(|row| row.first())
            .fold(0, |below, first| first - below)
    }
}

fn difference_rows(values: &[i64]) -> Vec<Vec<i64>> {
    let mut rows = vec![values.to_vec()];
    while let Some(last_row) = rows.last() {
        if last_row.iter().all(|v| *v == 0) {
            break;
        }

        let next_row = last_row.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
        rows.push(next_row);
    }

    rows
}

impl TryFrom<&str> for History {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let values = value
            .split_whitespace()
            .map(|s| s.parse::<i64>().map_err(|_| Error::InvalidValue(s.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(Error::EmptyHistory);
        }

        Ok(Self(values))
    }
}

pub fn read_histories<P: AsRef<Path>>(path: P) -> Result<Vec<History>> {
    grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            History::try_from(line.as_str()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}
