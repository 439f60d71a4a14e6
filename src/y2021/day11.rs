// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 11: Dumbo Octopus](https://adventofcode.com/2021/day/11)

use crate::PuzzleError;
use crate::grid::Grid;

/// Advance the octopuses by one step, returning how many flashed
fn step(energy: &mut Grid<u8>) -> usize {
    let mut flashing = Vec::new();
    for p in energy.points().collect::<Vec<_>>() {
        energy[p] += 1;
        if energy[p] == 10 {
            flashing.push(p);
        }
    }
    let mut flashed = 0;
    while let Some(p) = flashing.pop() {
        flashed += 1;
        let neighbors: Vec<_> = energy.neighbors8(p).map(|(n, _)| n).collect();
        for n in neighbors {
            energy[n] += 1;
            if energy[n] == 10 {
                flashing.push(n);
            }
        }
    }
    for p in energy.points().collect::<Vec<_>>() {
        if energy[p] > 9 {
            energy[p] = 0;
        }
    }
    flashed
}

/// How many total flashes are there after 100 steps?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let mut energy = Grid::parse_digits(input)?;
    Ok((0..100).map(|_| step(&mut energy)).sum())
}

/// What is the first step during which all octopuses flash?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let mut energy = Grid::parse_digits(input)?;
    let everyone = energy.height() * energy.width();
    if everyone == 0 {
        return Err(PuzzleError::malformed("no octopuses"));
    }
    Ok((1..)
        .find(|_| step(&mut energy) == everyone)
        .unwrap_or_default())
}
