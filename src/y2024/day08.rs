// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 8: Resonant Collinearity](https://adventofcode.com/2024/day/8)

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::PuzzleError;
use crate::grid::{Grid, Point};

/// Count the unique antinode locations.
///
/// For each pair of same-frequency antennas, antinodes lie on the line through them, at
/// multiples of the distance between them. `harmonics` is the range of multiples to consider,
/// counting outwards from each antenna.
fn antinodes(input: &str, harmonics: RangeInclusive<i64>) -> Result<usize, PuzzleError> {
    let map = Grid::parse_chars(input)?;
    let mut antennas: HashMap<char, Vec<Point>> = HashMap::new();
    for (p, &c) in map.iter().filter(|(_, c)| **c != '.') {
        antennas.entry(c).or_default().push(p);
    }
    let mut found = HashSet::new();
    for group in antennas.values() {
        for (&a, &b) in group.iter().tuple_combinations() {
            for (from, step) in [(a, a - b), (b, b - a)] {
                found.extend(
                    harmonics
                        .clone()
                        .map(|k| from + step * k)
                        .take_while(|&p| map.in_bounds(p)),
                );
            }
        }
    }
    Ok(found.len())
}

/// Calculate the impact of the signal. How many unique locations within the bounds of the map
/// contain an antinode?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    antinodes(input, 1..=1)
}

/// Calculate the impact of the signal using this updated model. How many unique locations within
/// the bounds of the map contain an antinode?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    antinodes(input, 0..=i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2024/day08.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(14));
        assert_eq!(part2(EXAMPLE), Ok(34));
    }
}
