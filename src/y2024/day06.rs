// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 6: Guard Gallivant](https://adventofcode.com/2024/day/6)

use std::collections::HashSet;

use crate::grid::{DirSet, Direction, Grid, Point};
use crate::{OrMalformed, PuzzleError};

fn lab(input: &str) -> Result<(Grid<bool>, Point), PuzzleError> {
    let tiles = Grid::parse_chars(input)?;
    let guard = tiles.find(&'^').or_malformed("no guard")?;
    Ok((tiles.map(|&t| t == '#'), guard))
}

/// Walk the guard's patrol, returning every tile visited, or [None] if the guard gets stuck in a
/// loop
fn patrol(obstacles: &Grid<bool>, start: Point) -> Option<HashSet<Point>> {
    let mut seen = Grid::filled(obstacles.height(), obstacles.width(), DirSet::EMPTY);
    let (mut at, mut facing) = (start, Direction::North);
    loop {
        if !seen[at].insert(facing) {
            return None;
        }
        let ahead = at.step(facing);
        match obstacles.get(ahead).copied() {
            None => break,
            Some(true) => facing = facing.right(),
            Some(false) => at = ahead,
        }
    }
    Some(seen.iter().filter(|(_, d)| !d.is_empty()).map(|(p, _)| p).collect())
}

/// How many distinct positions will the guard visit before leaving the mapped area?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let (obstacles, guard) = lab(input)?;
    patrol(&obstacles, guard)
        .map(|visited| visited.len())
        .ok_or(PuzzleError::NoSolution("the guard never leaves"))
}

/// You need to get the guard stuck in a loop by adding a single new obstruction. How many different
/// positions could you choose for this obstruction?
///
/// Only tiles on the guard's original path can change where the guard goes.
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let (mut obstacles, guard) = lab(input)?;
    let visited =
        patrol(&obstacles, guard).ok_or(PuzzleError::NoSolution("the guard never leaves"))?;
    let mut loops = 0;
    for p in visited.into_iter().filter(|&p| p != guard) {
        obstacles[p] = true;
        if patrol(&obstacles, guard).is_none() {
            loops += 1;
        }
        obstacles[p] = false;
    }
    Ok(loops)
}
