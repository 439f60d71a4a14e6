// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 13: Claw Contraption](https://adventofcode.com/2024/day/13)

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::PuzzleError;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Button A: X\+(\d+), Y\+(\d+)\s+",
        r"Button B: X\+(\d+), Y\+(\d+)\s+",
        r"Prize: X=(\d+), Y=(\d+)",
    ))
    .expect("bad regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// The fewest tokens needed to win the prize, if it can be won.
    ///
    /// Two buttons and two axes make a system of two linear equations, solved with Cramer's rule.
    /// A solution only counts if both button presses come out as whole, non-negative numbers.
    fn tokens(self) -> Option<i64> {
        let Machine { a, b, prize } = self;
        let det = a.0 * b.1 - a.1 * b.0;
        if det == 0 {
            return None;
        }
        let a_num = prize.0 * b.1 - prize.1 * b.0;
        let b_num = a.0 * prize.1 - a.1 * prize.0;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (presses_a, presses_b) = (a_num / det, b_num / det);
        (presses_a >= 0 && presses_b >= 0).then_some(3 * presses_a + presses_b)
    }
}

fn machine(cap: Captures<'_>, offset: i64) -> Result<Machine, PuzzleError> {
    let n = |i: usize| cap[i].parse::<i64>();
    Ok(Machine {
        a: (n(1)?, n(2)?),
        b: (n(3)?, n(4)?),
        prize: (n(5)? + offset, n(6)? + offset),
    })
}

fn machines(input: &str, offset: i64) -> Result<Vec<Machine>, PuzzleError> {
    let machines = MACHINE
        .captures_iter(input)
        .map(|cap| machine(cap, offset))
        .collect::<Result<Vec<_>, _>>()?;
    if machines.is_empty() {
        return Err(PuzzleError::malformed("no claw machines"));
    }
    Ok(machines)
}

/// The fewest tokens needed to win every winnable prize, with `offset` added to each prize's
/// coordinates
pub fn fewest_tokens(input: &str, offset: i64) -> Result<i64, PuzzleError> {
    Ok(machines(input, offset)?
        .into_iter()
        .filter_map(Machine::tokens)
        .sum())
}

/// What is the fewest tokens you would have to spend to win all possible prizes?
pub fn part1(input: &str) -> Result<i64, PuzzleError> {
    fewest_tokens(input, 0)
}

/// Using the corrected prize coordinates, what is the fewest tokens you would have to spend to win
/// all possible prizes?
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    fewest_tokens(input, 10_000_000_000_000)
}
