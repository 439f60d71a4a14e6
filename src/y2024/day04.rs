// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 4: Ceres Search](https://adventofcode.com/2024/day/4)

use crate::PuzzleError;
use crate::grid::{Grid, Point, Velocity};

fn spells(grid: &Grid<char>, start: Point, step: Velocity, word: &str) -> bool {
    word.chars()
        .zip(0..)
        .all(|(c, i)| grid.get(start + step * i) == Some(&c))
}

/// How many times does `XMAS` appear?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let grid = Grid::parse_chars(input)?;
    Ok(grid
        .find_all(&'X')
        .map(|p| {
            Velocity::KING_MOVES
                .iter()
                .filter(|&&v| spells(&grid, p, v, "XMAS"))
                .count()
        })
        .sum())
}

/// How many times does an X-MAS appear?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let grid = Grid::parse_chars(input)?;
    let diagonal = |p: Point, v: Velocity| {
        spells(&grid, p - v, v, "MAS") || spells(&grid, p - v, v, "SAM")
    };
    Ok(grid
        .find_all(&'A')
        .filter(|&p| diagonal(p, Velocity::new(1, 1)) && diagonal(p, Velocity::new(1, -1)))
        .count())
}
