// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 15: Chiton](https://adventofcode.com/2021/day/15)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::PuzzleError;
use crate::cost::Cost;
use crate::grid::{Grid, Point};

/// Find the lowest total risk of any path from the top left to the bottom right
fn lowest_risk(risk: &Grid<u8>) -> Result<u64, PuzzleError> {
    let start = Point::new(0, 0);
    let end = Point::new(risk.height() as i64 - 1, risk.width() as i64 - 1);
    let mut best = Grid::filled(risk.height(), risk.width(), Cost::Infinite);
    let mut queue = BinaryHeap::from([Reverse((Cost::ZERO, start))]);
    *best.get_mut(start).ok_or(PuzzleError::malformed("empty map"))? = Cost::ZERO;
    while let Some(Reverse((cost, p))) = queue.pop() {
        if p == end {
            return cost.finite().ok_or(PuzzleError::NoSolution("risk overflowed"));
        }
        if cost > best[p] {
            continue;
        }
        for (n, &r) in risk.neighbors(p) {
            let next = cost + u64::from(r);
            if next < best[n] {
                best[n] = next;
                queue.push(Reverse((next, n)));
            }
        }
    }
    Err(PuzzleError::NoSolution("exit is unreachable"))
}

/// What is the lowest total risk of any path from the top left to the bottom right?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    lowest_risk(&Grid::parse_digits(input)?)
}

/// Tile the map 5 times in each direction, with each tile's risk levels 1 higher than the tile
/// above or to the left of it. Risk levels above 9 wrap back around to 1.
fn full_map(tile: &Grid<u8>) -> Result<Grid<u8>, PuzzleError> {
    let (height, width) = (tile.height(), tile.width());
    Grid::from_rows((0..height * 5).map(|r| {
        (0..width * 5)
            .map(|c| {
                let base = tile.row(r % height)[c % width];
                let bump = (r / height + c / width) as u8;
                (base + bump - 1) % 9 + 1
            })
            .collect::<Vec<_>>()
    }))
}

/// Using the full map, what is the lowest total risk of any path from the top left to the bottom
/// right?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    lowest_risk(&full_map(&Grid::parse_digits(input)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day15.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(40));
        assert_eq!(part2(EXAMPLE), Ok(315));
    }

    #[test]
    fn tiling() {
        let tile = Grid::parse_digits("8").unwrap();
        let full = full_map(&tile).unwrap();
        assert_eq!(full.row(0), [8, 9, 1, 2, 3]);
        assert_eq!(full.row(4), [3, 4, 5, 6, 7]);
    }
}
