// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 11: Cosmic Expansion](https://adventofcode.com/2023/day/11)

use crate::PuzzleError;
use crate::grid::Grid;

/// Sum the distances between every pair of values in `coords`, which must be sorted
fn pairwise_distance(coords: &[u64]) -> u64 {
    let (mut total, mut preceding) = (0, 0);
    for (i, &x) in (0..).zip(coords) {
        total += x * i - preceding;
        preceding += x;
    }
    total
}

/// Map each index along an axis to its position after every empty line is replaced by `factor`
/// empty lines
fn expanded(occupied: impl Iterator<Item = bool>, factor: u64) -> Vec<u64> {
    let mut pos = 0;
    occupied
        .map(|full| {
            let here = pos;
            pos += if full { 1 } else { factor };
            here
        })
        .collect()
}

/// Expand the universe by replacing every empty row and column with `factor` of them, then sum
/// the lengths of the shortest paths between every pair of galaxies
pub fn expand(input: &str, factor: u64) -> Result<u64, PuzzleError> {
    let image = Grid::parse_chars(input)?;
    let rows = expanded(image.rows().map(|r| r.contains(&'#')), factor);
    let cols = expanded(
        (0..image.width()).map(|c| image.col(c).any(|&t| t == '#')),
        factor,
    );
    let galaxies: Vec<_> = image.find_all(&'#').collect();
    let mut ys: Vec<u64> = galaxies.iter().map(|p| rows[p.row as usize]).collect();
    let mut xs: Vec<u64> = galaxies.iter().map(|p| cols[p.col as usize]).collect();
    ys.sort_unstable();
    xs.sort_unstable();
    Ok(pairwise_distance(&ys) + pairwise_distance(&xs))
}

/// Expand the universe, then find the length of the shortest path between every pair of galaxies.
/// What is the sum of these lengths?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    expand(input, 2)
}

/// Now, instead of the expansion you did before, make each empty row or column one million times
/// larger. What is the sum of these lengths?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    expand(input, 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day11.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(374));
        assert_eq!(expand(EXAMPLE, 10), Ok(1030));
        assert_eq!(expand(EXAMPLE, 100), Ok(8410));
    }
}
