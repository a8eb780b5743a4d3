use std::{collections::HashMap, error, fmt::Display, path::Path};

use anyhow::{Context, Result};
use grid::search;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidMachine(String),
    TooManyLights(usize),
    TooManyButtons(usize),
    LightOutOfRange(usize, usize),
    CounterCountMismatch(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMachine(s) => write!(f, "Invalid machine description({}).", s),
            Error::TooManyLights(n) => {
                write!(f, "Machine has {} lights, at most {} are supported.", n, MAX_LIGHT_N)
            }
            Error::TooManyButtons(n) => write!(
                f,
                "Machine has {} buttons, at most {} are supported.",
                n, MAX_BUTTON_N
            ),
            Error::LightOutOfRange(ind, light_n) => write!(
                f,
                "Button wired to light {}, machine only has {}.",
                ind, light_n
            ),
            Error::CounterCountMismatch(light_n, counter_n) => write!(
                f,
                "Machine has {} lights but {} joltage counters.",
                light_n, counter_n
            ),
        }
    }
}

impl error::Error for Error {}

const MAX_LIGHT_N: usize = u64::BITS as usize;
const MAX_BUTTON_N: usize = 20;

/// Lights and buttons are bit sets, bit `i` stands for light (counter) `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    lights: u64,
    buttons: Vec<u64>,
    joltages: Vec<u32>,
}

impl Machine {
    /// Fewest presses that turn on exactly the wanted lights, every light starts off.
    pub fn min_light_presses(&self) -> Option<usize> {
        // Pressing a button twice cancels out, no optimum needs more presses than buttons.
        let steps_of_states = search::bfs_steps(
            0u64,
            |state| {
                self.buttons
                    .iter()
                    .map(|button| state ^ button)
                    .collect::<Vec<_>>()
            },
            self.buttons.len(),
        );

        steps_of_states.get(&self.lights).copied()
    }

    /// Fewest presses that raise every counter from 0 to its required joltage.
    ///
    /// The buttons pressed an odd number of times must fix the parity of each
    /// counter. Once those are pressed the rest is an even number of presses
    /// per button, which is twice a solution for the halved targets.
    pub fn min_joltage_presses(&self) -> Option<usize> {
        let combos = (0..(1u32 << self.buttons.len()))
            .map(|subset| {
                let mut increments = vec![0u32; self.joltages.len()];
                for (ind, button) in self.buttons.iter().enumerate() {
                    if subset & (1 << ind) == 0 {
                        continue;
                    }
                    for (counter, increment) in increments.iter_mut().enumerate() {
                        if button & (1 << counter) != 0 {
                            *increment += 1;
                        }
                    }
                }
                (subset.count_ones() as usize, increments)
            })
            .collect::<Vec<_>>();

        let mut cache = HashMap::new();
        let presses = min_presses_for(&self.joltages, &combos, &mut cache);
        log::debug!(
            "Joltage search over {} button combination(s) cached {} target(s).",
            combos.len(),
            cache.len()
        );
        presses
    }
}

fn min_presses_for(
    targets: &[u32],
    combos: &[(usize, Vec<u32>)],
    cache: &mut HashMap<Vec<u32>, Option<usize>>,
) -> Option<usize> {
    if targets.iter().all(|t| *t == 0) {
        return Some(0);
    }
    if let Some(presses) = cache.get(targets) {
        return *presses;
    }

    let mut best = None;
    for (press_n, increments) in combos {
        let fits = targets
            .iter()
            .zip(increments)
            .all(|(t, inc)| inc <= t && (t - inc) % 2 == 0);
        if !fits {
            continue;
        }

        let halves = targets
            .iter()
            .zip(increments)
            .map(|(t, inc)| (t - inc) / 2)
            .collect::<Vec<_>>();
        if let Some(rest) = min_presses_for(&halves, combos, cache) {
            let presses = press_n + 2 * rest;
            if best.map_or(true, |b| presses < b) {
                best = Some(presses);
            }
        }
    }

    cache.insert(targets.to_vec(), best);
    best
}

impl TryFrom<&str> for Machine {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static MACHINE_REGEX: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^\[([.#]+)\]\s*((?:\(\d+(?:,\d+)*\)\s*)*)\{(\d+(?:,\d+)*)\}$").unwrap()
        });
        static BUTTON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([\d,]+)\)").unwrap());

        let invalid = || Error::InvalidMachine(value.to_string());
        let caps = MACHINE_REGEX.captures(value.trim()).ok_or_else(invalid)?;

        let light_n = caps[1].len();
        if light_n > MAX_LIGHT_N {
            return Err(Error::TooManyLights(light_n));
        }
        let lights = caps[1]
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == '#')
            .fold(0u64, |mask, (ind, _)| mask | (1 << ind));

        let mut buttons = Vec::new();
        for button_caps in BUTTON_REGEX.captures_iter(&caps[2]) {
            let mut mask = 0u64;
            for ind in button_caps[1].split(',') {
                let ind = ind.parse::<usize>().map_err(|_| invalid())?;
                if ind >= light_n {
                    return Err(Error::LightOutOfRange(ind, light_n));
                }
                mask |= 1 << ind;
            }
            buttons.push(mask);
        }
        if buttons.len() > MAX_BUTTON_N {
            return Err(Error::TooManyButtons(buttons.len()));
        }

        let joltages = caps[3]
            .split(',')
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        if joltages.len() != light_n {
            return Err(Error::CounterCountMismatch(light_n, joltages.len()));
        }

        Ok(Self {
            lights,
            buttons,
            joltages,
        })
    }
}

pub fn read_machines<P: AsRef<Path>>(path: P) -> Result<Vec<Machine>> {
    grid::read_lines(&path)?
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            Machine::try_from(line.as_str()).with_context(|| {
                format!(
                    "Failed to parse line {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}
