// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 1: Historian Hysteria](https://adventofcode.com/2024/day/1)

use itertools::Itertools;

use crate::{PuzzleError, ints};

fn pair(line: &str) -> Result<(u32, u32), PuzzleError> {
    match ints::<u32>(line)?[..] {
        [left, right] => Ok((left, right)),
        _ => Err(PuzzleError::malformed(format!("expected two ids in {line:?}"))),
    }
}

fn lists(input: &str) -> Result<(Vec<u32>, Vec<u32>), PuzzleError> {
    input.lines().map(pair).process_results(|pairs| pairs.unzip())
}

/// What is the total distance between your lists?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    let (mut left, mut right) = lists(input)?;
    left.sort_unstable();
    right.sort_unstable();
    Ok(left.iter().zip_eq(&right).map(|(l, r)| l.abs_diff(*r)).sum())
}

/// What is their similarity score?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let (left, right) = lists(input)?;
    let counts = right.into_iter().counts();
    Ok(left
        .iter()
        .map(|id| *id as usize * counts.get(id).copied().unwrap_or_default())
        .sum())
}
