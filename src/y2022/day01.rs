// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 1: Calorie Counting](https://adventofcode.com/2022/day/1)

use itertools::Itertools;

use crate::{PuzzleError, ints};

/// The total calories carried by the `n` elves carrying the most
pub fn top_elves(input: &str, n: usize) -> Result<u32, PuzzleError> {
    let totals = input
        .split("\n\n")
        .map(|elf| ints::<u32>(elf).map(|cals| cals.into_iter().sum::<u32>()))
        .collect::<Result<Vec<_>, _>>()?;
    if totals.len() < n {
        return Err(PuzzleError::NoSolution("not enough elves"));
    }
    Ok(totals.into_iter().k_largest(n).sum())
}

/// Find the Elf carrying the most Calories. How many total Calories is that Elf carrying?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    top_elves(input, 1)
}

/// Find the top three Elves carrying the most Calories. How many Calories are those Elves carrying
/// in total?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    top_elves(input, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2022/day01.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(24000));
        assert_eq!(part2(EXAMPLE), Ok(45000));
        assert_eq!(top_elves(EXAMPLE, 2), Ok(35000));
    }

    #[test]
    fn too_few_elves() {
        assert_eq!(
            top_elves("100\n\n200", 3),
            Err(PuzzleError::NoSolution("not enough elves"))
        );
    }
}
