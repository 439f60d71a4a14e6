// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 11: Plutonian Pebbles](https://adventofcode.com/2024/day/11)

use std::collections::HashMap;

use crate::{PuzzleError, ints};

/// Count the stones that a single stone engraved with `n` turns into after `blinks` blinks.
///
/// Stones never interact, and small numbers come up over and over, so results are cached by
/// stone and number of blinks.
fn count(n: u64, blinks: usize, cache: &mut HashMap<(u64, usize), u64>) -> u64 {
    if blinks == 0 {
        return 1;
    }
    if let Some(&known) = cache.get(&(n, blinks)) {
        return known;
    }
    let digits = n.checked_ilog10().unwrap_or(0) + 1;
    let total = if n == 0 {
        count(1, blinks - 1, cache)
    } else if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        count(n / half, blinks - 1, cache) + count(n % half, blinks - 1, cache)
    } else {
        count(n * 2024, blinks - 1, cache)
    };
    cache.insert((n, blinks), total);
    total
}

/// Count the stones after blinking `blinks` times
pub fn stones_after(input: &str, blinks: usize) -> Result<u64, PuzzleError> {
    let mut cache = HashMap::new();
    Ok(ints::<u64>(input)?
        .into_iter()
        .map(|n| count(n, blinks, &mut cache))
        .sum())
}

/// How many stones will you have after blinking 25 times?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    stones_after(input, 25)
}

/// How many stones would you have after blinking a total of 75 times?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    stones_after(input, 75)
}
