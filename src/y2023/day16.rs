// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 16: The Floor Will Be Lava](https://adventofcode.com/2023/day/16)

use crate::PuzzleError;
use crate::grid::{DirSet, Direction, Grid, Point};

/// The directions a beam heading in `dir` continues in after entering `tile`
fn deflect(tile: char, dir: Direction) -> (Direction, Option<Direction>) {
    use Direction::*;
    match (tile, dir) {
        ('/', North) => (East, None),
        ('/', East) => (North, None),
        ('/', South) => (West, None),
        ('/', West) => (South, None),
        ('\\', North) => (West, None),
        ('\\', West) => (North, None),
        ('\\', South) => (East, None),
        ('\\', East) => (South, None),
        ('|', East | West) => (North, Some(South)),
        ('-', North | South) => (East, Some(West)),
        _ => (dir, None),
    }
}

/// Count the tiles energized by a beam entering at `start`, heading in `dir`
pub fn energize(contraption: &Grid<char>, start: Point, dir: Direction) -> usize {
    let mut beams = Grid::filled(contraption.height(), contraption.width(), DirSet::EMPTY);
    let mut stack = vec![(start, dir)];
    while let Some((p, dir)) = stack.pop() {
        let Some(&tile) = contraption.get(p) else {
            continue;
        };
        if !beams[p].insert(dir) {
            continue;
        }
        let (a, b) = deflect(tile, dir);
        stack.push((p.step(a), a));
        if let Some(b) = b {
            stack.push((p.step(b), b));
        }
    }
    beams.iter().filter(|(_, dirs)| !dirs.is_empty()).count()
}

/// With the beam starting in the top-left heading right, how many tiles end up being energized?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let contraption = Grid::parse_chars(input)?;
    Ok(energize(&contraption, Point::new(0, 0), Direction::East))
}

/// Find the initial beam configuration that energizes the largest number of tiles; how many tiles
/// are energized in that configuration?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let contraption = Grid::parse_chars(input)?;
    let (h, w) = (contraption.height() as i64, contraption.width() as i64);
    let rows = (0..h).flat_map(|r| {
        [
            (Point::new(r, 0), Direction::East),
            (Point::new(r, w - 1), Direction::West),
        ]
    });
    let cols = (0..w).flat_map(|c| {
        [
            (Point::new(0, c), Direction::South),
            (Point::new(h - 1, c), Direction::North),
        ]
    });
    rows.chain(cols)
        .map(|(p, dir)| energize(&contraption, p, dir))
        .max()
        .ok_or(PuzzleError::malformed("empty contraption"))
}
