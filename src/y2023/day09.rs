// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 9: Mirage Maintenance](https://adventofcode.com/2023/day/9)

use itertools::Itertools;

use crate::{PuzzleError, ints};

/// Predict the value after the end of `history`, by summing the last value of each sequence of
/// differences until they're all zero
fn extrapolate(history: &[i64]) -> i64 {
    let mut seq = history.to_vec();
    let mut next = 0;
    while seq.iter().any(|&n| n != 0) {
        next += seq.last().copied().unwrap_or_default();
        seq = seq.iter().tuple_windows().map(|(a, b)| b - a).collect();
    }
    next
}

fn histories(input: &str) -> Result<Vec<Vec<i64>>, PuzzleError> {
    input.lines().map(ints).collect()
}

/// Analyze your OASIS report and extrapolate the next value for each history. What is the sum of
/// these extrapolated values?
pub fn part1(input: &str) -> Result<i64, PuzzleError> {
    Ok(histories(input)?.iter().map(|h| extrapolate(h)).sum())
}

/// Analyze your OASIS report again, this time extrapolating the previous value for each history.
/// What is the sum of these extrapolated values?
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    Ok(histories(input)?
        .into_iter()
        .map(|mut h| {
            h.reverse();
            extrapolate(&h)
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day09.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(114));
        assert_eq!(part2(EXAMPLE), Ok(2));
    }

    #[test]
    fn single_history() {
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(extrapolate(&[45, 30, 21, 16, 13, 10]), 5);
    }
}
