// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 10: Hoof It](https://adventofcode.com/2024/day/10)

use std::collections::HashSet;

use crate::PuzzleError;
use crate::grid::{Grid, Point};

/// Every trail end reached from `trailhead`, once for each distinct hiking trail that reaches it
fn trail_ends(map: &Grid<u8>, trailhead: Point) -> Vec<Point> {
    let mut ends = Vec::new();
    let mut stack = vec![trailhead];
    while let Some(p) = stack.pop() {
        let height = map[p];
        if height == 9 {
            ends.push(p);
            continue;
        }
        stack.extend(
            map.neighbors(p)
                .filter(|&(_, &h)| h == height + 1)
                .map(|(n, _)| n),
        );
    }
    ends
}

fn trailheads(input: &str, rate: impl Fn(Vec<Point>) -> usize) -> Result<usize, PuzzleError> {
    let map = Grid::parse_digits(input)?;
    Ok(map
        .find_all(&0)
        .map(|head| rate(trail_ends(&map, head)))
        .sum())
}

/// What is the sum of the scores of all trailheads on your topographic map?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    trailheads(input, |ends| ends.into_iter().collect::<HashSet<_>>().len())
}

/// What is the sum of the ratings of all trailheads?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    trailheads(input, |ends| ends.len())
}
