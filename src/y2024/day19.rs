// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 19: Linen Layout](https://adventofcode.com/2024/day/19)

use crate::{OrMalformed, PuzzleError};

/// Count the ways to make `design` out of `towels`, where `ways[i]` is the number of ways to make
/// the first `i` stripes
fn arrangements(design: &str, towels: &[&str]) -> u64 {
    let mut ways = vec![0u64; design.len() + 1];
    ways[0] = 1;
    for i in 0..design.len() {
        if ways[i] == 0 {
            continue;
        }
        for towel in towels {
            if design[i..].starts_with(towel) {
                ways[i + towel.len()] += ways[i];
            }
        }
    }
    ways[design.len()]
}

fn designs(input: &str) -> Result<Vec<u64>, PuzzleError> {
    let (towels, designs) = input.split_once("\n\n").or_malformed("missing designs")?;
    let towels: Vec<&str> = towels.split(',').map(str::trim).collect();
    Ok(designs
        .lines()
        .map(|design| arrangements(design.trim(), &towels))
        .collect())
}

/// How many designs are possible?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    Ok(designs(input)?.into_iter().filter(|&n| n > 0).count())
}

/// What do you get if you add up the number of different ways you could make each design?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    Ok(designs(input)?.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2024/day19.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(6));
        assert_eq!(part2(EXAMPLE), Ok(16));
    }

    #[test]
    fn each_design() {
        assert_eq!(designs(EXAMPLE), Ok(vec![2, 1, 4, 6, 0, 1, 2, 0]));
    }
}
