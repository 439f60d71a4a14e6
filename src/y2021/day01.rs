// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 1: Sonar Sweep](https://adventofcode.com/2021/day/1)

use crate::PuzzleError;

fn depths(input: &str) -> Result<Vec<u32>, PuzzleError> {
    input
        .lines()
        .map(|line| line.trim().parse().map_err(PuzzleError::from))
        .collect()
}

/// Count how many sums of `window` consecutive depths are larger than the sum before them.
///
/// Consecutive windows share all but their first and last depths, so only those two need to be
/// compared.
pub fn count_increases(depths: &[u32], window: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(window))
        .filter(|(first, last)| last > first)
        .count()
}

/// How many measurements are larger than the previous measurement?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    Ok(count_increases(&depths(input)?, 1))
}

/// How many sums of a three-measurement sliding window are larger than the previous sum?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    Ok(count_increases(&depths(input)?, 3))
}
