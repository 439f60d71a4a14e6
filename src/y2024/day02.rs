// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 2: Red-Nosed Reports](https://adventofcode.com/2024/day/2)

use itertools::Itertools;

use crate::{PuzzleError, ints};

/// A report is safe if its levels are all increasing or all decreasing, by 1 to 3 at each step
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let steps = || levels.clone().tuple_windows().map(|(a, b)| b - a);
    steps().all(|d| (1..=3).contains(&d)) || steps().all(|d| (-3..=-1).contains(&d))
}

fn reports(input: &str) -> Result<Vec<Vec<i32>>, PuzzleError> {
    input.lines().map(ints).collect()
}

/// How many reports are safe?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    Ok(reports(input)?
        .iter()
        .filter(|r| is_safe(r.iter().copied()))
        .count())
}

/// Update your analysis by handling situations where the Problem Dampener can remove a single level
/// from unsafe reports. How many reports are now safe?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    Ok(reports(input)?
        .iter()
        .filter(|r| {
            is_safe(r.iter().copied())
                || (0..r.len()).any(|skip| {
                    is_safe(
                        r.iter()
                            .enumerate()
                            .filter(move |&(i, _)| i != skip)
                            .map(|(_, &level)| level),
                    )
                })
        })
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2024/day02.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(2));
        assert_eq!(part2(EXAMPLE), Ok(4));
    }

    /// `1 3 2 4 5`: Safe by removing the second level, `3`.
    #[test]
    fn dampened() {
        assert!(!is_safe([1, 3, 2, 4, 5].into_iter()));
        assert!(is_safe([1, 2, 4, 5].into_iter()));
    }
}
