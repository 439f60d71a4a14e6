// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 9: Smoke Basin](https://adventofcode.com/2021/day/9)

use std::collections::HashSet;

use crate::PuzzleError;
use crate::grid::{Grid, Point};

fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = (Point, u8)> + '_ {
    heights
        .iter()
        .filter(|&(p, h)| heights.neighbors(p).all(|(_, n)| n > h))
        .map(|(p, &h)| (p, h))
}

/// What is the sum of the risk levels of all low points on your heightmap?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    let heights = Grid::parse_digits(input)?;
    Ok(low_points(&heights).map(|(_, h)| u32::from(h) + 1).sum())
}

/// What do you get if you multiply together the sizes of the three largest basins?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let basins = Grid::parse_digits(input)?.map(|&h| h != 9);
    let mut seen = HashSet::new();
    let mut sizes = Vec::new();
    for p in basins.find_all(&true) {
        if seen.contains(&p) {
            continue;
        }
        let basin = basins.contiguous(p);
        sizes.push(basin.len());
        seen.extend(basin);
    }
    if sizes.len() < 3 {
        return Err(PuzzleError::NoSolution("fewer than three basins"));
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes[..3].iter().product())
}
