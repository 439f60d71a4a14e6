// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 12: Garden Groups](https://adventofcode.com/2024/day/12)

use std::collections::HashSet;

use crate::PuzzleError;
use crate::grid::{Direction, Grid, Point};

/// Every region of same-type plots
fn regions(garden: &Grid<char>) -> Vec<HashSet<Point>> {
    let mut seen = HashSet::new();
    let mut regions = Vec::new();
    for p in garden.points() {
        if seen.contains(&p) {
            continue;
        }
        let region: HashSet<Point> = garden.contiguous(p).into_iter().collect();
        seen.extend(region.iter().copied());
        regions.push(region);
    }
    regions
}

/// Every piece of fence around `region`, as a plot and the side of it the fence is on
fn fences(region: &HashSet<Point>) -> impl Iterator<Item = (Point, Direction)> + '_ {
    region.iter().flat_map(move |&p| {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| !region.contains(&p.step(dir)))
            .map(move |dir| (p, dir))
    })
}

/// Count the sides of `region`.
///
/// A side is a straight run of fence pieces, so it's counted at the last piece of each run,
/// looking clockwise along the fence.
fn sides(region: &HashSet<Point>) -> usize {
    let fenced: HashSet<(Point, Direction)> = fences(region).collect();
    fenced
        .iter()
        .filter(|&&(p, dir)| !fenced.contains(&(p.step(dir.right()), dir)))
        .count()
}

fn price(input: &str, measure: impl Fn(&HashSet<Point>) -> usize) -> Result<usize, PuzzleError> {
    let garden = Grid::parse_chars(input)?;
    Ok(regions(&garden)
        .iter()
        .map(|region| region.len() * measure(region))
        .sum())
}

/// What is the total price of fencing all regions on your map?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    price(input, |region| fences(region).count())
}

/// What is the new total price of fencing all regions on your map, with the bulk discount?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    price(input, sides)
}
