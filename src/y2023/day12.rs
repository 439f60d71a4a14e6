// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 12: Hot Springs](https://adventofcode.com/2023/day/12)

use itertools::Itertools;

use crate::{OrMalformed, PuzzleError};

/// Count the ways the unknown springs (`?`) could be filled in so that the runs of damaged springs
/// (`#`) match `groups`.
///
/// `ways[i][g]` is the number of arrangements of `springs[i..]` matching `groups[g..]`, filled in
/// from the end.
fn arrangements(springs: &[u8], groups: &[usize]) -> u64 {
    let n = springs.len();
    let mut ways = vec![vec![0u64; groups.len() + 1]; n + 2];
    ways[n][groups.len()] = 1;
    ways[n + 1][groups.len()] = 1;
    for i in (0..n).rev() {
        for g in 0..=groups.len() {
            let mut count = 0;
            if springs[i] != b'#' {
                count += ways[i + 1][g];
            }
            if let Some(&len) = groups.get(g)
                && springs[i] != b'.'
                && i + len <= n
                && !springs[i..i + len].contains(&b'.')
                && springs.get(i + len) != Some(&b'#')
            {
                count += ways[i + len + 1][g + 1];
            }
            ways[i][g] = count;
        }
    }
    ways[0][0]
}

fn record(line: &str, copies: usize) -> Result<u64, PuzzleError> {
    let (springs, groups) = line.split_once(' ').or_malformed("expected springs and groups")?;
    let groups = groups
        .trim()
        .split(',')
        .map(|n| n.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()?;
    let springs = std::iter::repeat_n(springs, copies).join("?");
    Ok(arrangements(springs.as_bytes(), &groups.repeat(copies)))
}

/// For each row, count all of the different arrangements of operational and broken springs that
/// meet the given criteria. What is the sum of those counts?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    input.lines().map(|line| record(line, 1)).sum()
}

/// Unfold your condition records; what is the new sum of possible arrangement counts?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    input.lines().map(|line| record(line, 5)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day12.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(21));
        assert_eq!(part2(EXAMPLE), Ok(525152));
    }

    #[test]
    fn each_row() {
        let counts: Vec<u64> = EXAMPLE.lines().map(|l| record(l, 1).unwrap()).collect();
        assert_eq!(counts, [1, 4, 1, 1, 4, 10]);
        assert_eq!(record("?###???????? 3,2,1", 5), Ok(506250));
    }
}
