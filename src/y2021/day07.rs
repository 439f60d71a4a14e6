// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 7: The Treachery of Whales](https://adventofcode.com/2021/day/7)

use crate::{OrMalformed, PuzzleError};

fn crabs(input: &str) -> Result<Vec<i64>, PuzzleError> {
    let mut positions = input
        .trim()
        .split(',')
        .map(|n| n.parse().map_err(PuzzleError::from))
        .collect::<Result<Vec<i64>, _>>()?;
    if positions.is_empty() {
        return Err(PuzzleError::malformed("no crabs"));
    }
    positions.sort_unstable();
    Ok(positions)
}

/// How much fuel must they spend to align to that position?
///
/// Each step costs 1 fuel, so the median minimizes the total.
pub fn part1(input: &str) -> Result<i64, PuzzleError> {
    let crabs = crabs(input)?;
    let median = crabs[crabs.len() / 2];
    Ok(crabs.iter().map(|c| (c - median).abs()).sum())
}

fn triangular_fuel(crabs: &[i64], target: i64) -> i64 {
    crabs
        .iter()
        .map(|c| {
            let n = (c - target).abs();
            n * (n + 1) / 2
        })
        .sum()
}

/// Same as [part1], but each step costs 1 more fuel than the last.
///
/// The best position is within 1/2 of the mean, so only the integers on either side of it need to
/// be checked.
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    let crabs = crabs(input)?;
    let len = i64::try_from(crabs.len()).ok().or_malformed("too many crabs")?;
    let floor = crabs.iter().sum::<i64>().div_euclid(len);
    Ok(triangular_fuel(&crabs, floor).min(triangular_fuel(&crabs, floor + 1)))
}
