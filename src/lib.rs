// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to [Advent of Code] puzzles, along with the utilities they share
//!
//! Every solved day lives in its own module under the module for its year, exposing a `part1`
//! and `part2` function which take the puzzle input as a string. The [solve] function dispatches
//! to them by [PuzzleId], wrapping the result in an [Answer].
//!
//! # Example
//!
//! ```rust
//! use advent::prelude::*;
//!
//! let input = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";
//! let id = PuzzleId::new(2021, 1);
//!
//! assert_eq!(solve(id, Part::One, input).unwrap(), Answer::Number(7));
//! assert_eq!(solve(id, Part::Two, input).unwrap(), Answer::Number(5));
//! ```
//!
//! The shared utilities are the [grid] module for 2D maps, the [cost] module for shortest path
//! searches, and the [style] module for terminal output. The [computer] module contains the
//! 3-bit computer from [2024 day 17], which has its own binary for running programs.
//!
//! [Advent of Code]: https://adventofcode.com
//! [2024 day 17]: https://adventofcode.com/2024/day/17

use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;

pub mod computer;
pub mod cost;
pub mod grid;
pub mod style;

pub mod y2021;
pub mod y2022;
pub mod y2023;
pub mod y2024;

use computer::ComputerError;

/// A small module that re-exports the items needed to solve puzzles
pub mod prelude {
    pub use crate::grid::{Direction, Grid, Point, Velocity};
    pub use crate::{Answer, Part, PuzzleError, PuzzleId, SOLVED, solve};
}

/// The answer to one part of a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A numeric answer
    Number(i64),
    /// Anything else, such as a list of names or a rendered picture
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! answer_from_small_int {
    ($($t: ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(n: $t) -> Self {
                    Self::Number(i64::from(n))
                }
            }
        )*
    };
}

answer_from_small_int!(i64, u32, i32, u8);

impl From<u64> for Answer {
    fn from(n: u64) -> Self {
        Self::Number(n.cast_signed())
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Self {
        Self::Number(n.cast_signed() as i64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Identifies a puzzle by its year and day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    /// The year of the event
    pub year: u16,
    /// The day of December, starting from 1
    pub day: u8,
}

impl PuzzleId {
    /// Shorthand to construct a [PuzzleId]
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

/// Which of the two parts of a puzzle to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The first part
    One,
    /// The second part, unlocked after solving the first
    Two,
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part 1"),
            Part::Two => write!(f, "part 2"),
        }
    }
}

/// An error that occured while solving a puzzle
#[derive(Debug)]
pub enum PuzzleError {
    /// The input did not have the expected layout
    MalformedInput(String),
    /// An integer in the input could not be parsed
    InvalidInt(ParseIntError),
    /// The input was well-formed, but has no answer
    NoSolution(&'static str),
    /// There is no solution registered for the puzzle
    Unsolved(PuzzleId),
    /// The 3-bit computer encountered an error
    Computer(ComputerError),
}

impl PuzzleError {
    pub(crate) fn malformed(what: impl Display) -> Self {
        Self::MalformedInput(what.to_string())
    }
}

impl PartialEq for PuzzleError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedInput(lhs), Self::MalformedInput(rhs)) => lhs == rhs,
            (Self::InvalidInt(lhs), Self::InvalidInt(rhs)) => lhs == rhs,
            (Self::NoSolution(lhs), Self::NoSolution(rhs)) => lhs == rhs,
            (Self::Unsolved(lhs), Self::Unsolved(rhs)) => lhs == rhs,
            (Self::Computer(lhs), Self::Computer(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::MalformedInput(what) => write!(f, "malformed input: {what}"),
            PuzzleError::InvalidInt(e) => write!(f, "could not parse integer: {e}"),
            PuzzleError::NoSolution(why) => write!(f, "no solution: {why}"),
            PuzzleError::Unsolved(id) => write!(f, "no solution is available for {id}"),
            PuzzleError::Computer(e) => write!(f, "3-bit computer failed: {e}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PuzzleError::InvalidInt(e) => Some(e),
            PuzzleError::Computer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseIntError> for PuzzleError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidInt(err)
    }
}

impl From<ComputerError> for PuzzleError {
    fn from(err: ComputerError) -> Self {
        Self::Computer(err)
    }
}

/// Shorthand for turning a missing piece of input into a [PuzzleError::MalformedInput]
pub(crate) trait OrMalformed<T> {
    fn or_malformed(self, what: &str) -> Result<T, PuzzleError>;
}

impl<T> OrMalformed<T> for Option<T> {
    fn or_malformed(self, what: &str) -> Result<T, PuzzleError> {
        self.ok_or_else(|| PuzzleError::malformed(what))
    }
}

/// Parse every whitespace-separated integer in `s`
pub(crate) fn ints<T: std::str::FromStr<Err = ParseIntError>>(
    s: &str,
) -> Result<Vec<T>, PuzzleError> {
    Ok(s.split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?)
}

macro_rules! registry {
    ($($year: literal => $module: ident [$($day: literal => $day_mod: ident),* $(,)?]),* $(,)?) => {
        /// Every puzzle with a registered solution, in chronological order
        pub const SOLVED: &[PuzzleId] = &[$($(PuzzleId::new($year, $day)),*),*];

        /// Solve one part of the puzzle identified by `id`, given its input text
        ///
        /// Returns [PuzzleError::Unsolved] if no solution is registered for `id`.
        pub fn solve(id: PuzzleId, part: Part, input: &str) -> Result<Answer, PuzzleError> {
            match (id.year, id.day, part) {
                $($(
                    ($year, $day, Part::One) => $module::$day_mod::part1(input).map(Answer::from),
                    ($year, $day, Part::Two) => $module::$day_mod::part2(input).map(Answer::from),
                )*)*
                _ => Err(PuzzleError::Unsolved(id)),
            }
        }
    };
}

registry! {
    2021 => y2021 [
        1 => day01, 2 => day02, 3 => day03, 4 => day04, 5 => day05,
        6 => day06, 7 => day07, 8 => day08, 9 => day09, 10 => day10,
        11 => day11, 12 => day12, 13 => day13, 14 => day14, 15 => day15,
    ],
    2022 => y2022 [
        1 => day01, 2 => day02, 3 => day03, 4 => day04, 5 => day05, 6 => day06,
    ],
    2023 => y2023 [
        1 => day01, 2 => day02, 3 => day03, 4 => day04, 5 => day05,
        6 => day06, 7 => day07, 8 => day08, 9 => day09, 10 => day10,
        11 => day11, 12 => day12, 13 => day13, 14 => day14, 15 => day15,
        16 => day16, 17 => day17,
    ],
    2024 => y2024 [
        1 => day01, 2 => day02, 3 => day03, 4 => day04, 5 => day05,
        6 => day06, 7 => day07, 8 => day08, 9 => day09, 10 => day10,
        11 => day11, 12 => day12, 13 => day13, 14 => day14, 15 => day15,
        16 => day16, 17 => day17, 18 => day18, 19 => day19, 20 => day20,
        21 => day21, 23 => day23,
    ],
}
