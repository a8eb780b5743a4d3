use std::{error, fmt::Display, ops::Range, path::Path};

use anyhow::Result;

#[derive(Debug)]
pub enum Error {
    NoOperatorRow,
    MissingOperator(usize),
    InvalidOperator(char, usize),
    InvalidNumber(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoOperatorRow => write!(f, "Worksheet has no operator row."),
            Error::MissingOperator(c) => {
                write!(f, "No operator for problem starting at column {}.", c)
            }
            Error::InvalidOperator(op, c) => {
                write!(f, "Invalid operator({}) at column {}.", op, c)
            }
            Error::InvalidNumber(s) => write!(f, "Invalid number({}) in worksheet.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

impl Operator {
    pub fn apply(&self, numbers: &[u64]) -> u64 {
        match self {
            Operator::Add => numbers.iter().sum(),
            Operator::Multiply => numbers.iter().product(),
        }
    }
}

/// How the digits of one problem are grouped into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// One number per row.
    Rows,
    /// One number per character column, most significant digit on top.
    Columns,
}

#[derive(Debug)]
pub struct Worksheet {
    rows: Vec<Vec<u8>>,
    problems: Vec<(Range<usize>, Operator)>,
}

impl Worksheet {
    /// Rows are padded to the same width, problems are split on all-blank columns.
    pub fn new(lines: &[String]) -> Result<Self, Error> {
        let mut lines = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect::<Vec<_>>();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        for line in &mut lines {
            line.resize(width, b' ');
        }
        let op_row = lines.pop().ok_or(Error::NoOperatorRow)?;

        let is_blank = |c: usize| op_row[c] == b' ' && lines.iter().all(|row| row[c] == b' ');
        let mut problems = Vec::new();
        let mut start = None;
        for c in 0..=width {
            match (start, c == width || is_blank(c)) {
                (None, false) => start = Some(c),
                (Some(s), true) => {
                    let op_c = (s..c)
                        .find(|c| op_row[*c] != b' ')
                        .ok_or(Error::MissingOperator(s))?;
                    let op = match op_row[op_c] {
                        b'+' => Operator::Add,
                        b'*' => Operator::Multiply,
                        other => return Err(Error::InvalidOperator(char::from(other), op_c)),
                    };
                    problems.push((s..c, op));
                    start = None;
                }
                _ => (),
            }
        }

        Ok(Self {
            rows: lines,
            problems,
        })
    }

    pub fn problem_n(&self) -> usize {
        self.problems.len()
    }

    pub fn grand_total(&self, reading: Reading) -> Result<u64, Error> {
        let mut total = 0;
        for (cols, op) in &self.problems {
            let numbers = match reading {
                Reading::Rows => self
                    .rows
                    .iter()
                    .filter_map(|row| parse_digits(&row[cols.clone()]).transpose())
                    .collect::<Result<Vec<_>, _>>()?,
                Reading::Columns => cols
                    .clone()
                    .rev()
                    .filter_map(|c| {
                        let column = self.rows.iter().map(|row| row[c]).collect::<Vec<_>>();
                        parse_digits(&column).transpose()
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            };
            total += op.apply(&numbers);
        }

        Ok(total)
    }
}

/// Number spelled by the non-blank characters, `None` if there are none.
fn parse_digits(text: &[u8]) -> Result<Option<u64>, Error> {
    let digits = String::from_utf8_lossy(text).replace(' ', "");
    if digits.is_empty() {
        return Ok(None);
    }

    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| Error::InvalidNumber(digits))
}

pub fn read_worksheet<P: AsRef<Path>>(path: P) -> Result<Worksheet> {
    let lines = grid::read_lines(&path)?;
    Ok(Worksheet::new(&lines)?)
}
