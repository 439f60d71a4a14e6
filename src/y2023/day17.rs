// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 17: Clumsy Crucible](https://adventofcode.com/2023/day/17)

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::PuzzleError;
use crate::cost::Cost;
use crate::grid::{Direction, Grid, Point};

/// Find the least heat loss from the top-left block to the bottom-right block, for a crucible that
/// must move between `min` and `max` blocks in a straight line before turning.
///
/// Every turn is 90°, so the search state is just a position and whether the crucible last moved
/// vertically. Each edge is a full straight run followed by a turn.
pub fn least_heat_loss(map: &Grid<u8>, min: i64, max: i64) -> Result<u64, PuzzleError> {
    let start = Point::new(0, 0);
    let end = Point::new(map.height() as i64 - 1, map.width() as i64 - 1);
    let mut best: HashMap<(Point, bool), Cost> = HashMap::new();
    let mut queue = BinaryHeap::new();
    for vertical in [false, true] {
        best.insert((start, vertical), Cost::ZERO);
        queue.push(Reverse((Cost::ZERO, start, vertical)));
    }

    while let Some(Reverse((cost, p, vertical))) = queue.pop() {
        if p == end {
            return cost.finite().ok_or(PuzzleError::NoSolution("heat loss overflowed"));
        }
        if best.get(&(p, vertical)).is_some_and(|&b| cost > b) {
            continue;
        }
        for dir in Direction::ALL.into_iter().filter(|d| d.is_vertical() != vertical) {
            let mut next = cost;
            let mut at = p;
            for run in 1..=max {
                at = at.step(dir);
                let Some(&loss) = map.get(at) else {
                    break;
                };
                next += u64::from(loss);
                if run < min {
                    continue;
                }
                let key = (at, dir.is_vertical());
                if best.get(&key).is_none_or(|&b| next < b) {
                    best.insert(key, next);
                    queue.push(Reverse((next, at, dir.is_vertical())));
                }
            }
        }
    }
    Err(PuzzleError::NoSolution("the factory is unreachable"))
}

/// Directing the crucible from the lava pool to the machine parts factory, but not moving more
/// than three consecutive blocks in the same direction, what is the least heat loss it can incur?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    least_heat_loss(&Grid::parse_digits(input)?, 1, 3)
}

/// Directing the ultra crucible from the lava pool to the machine parts factory, what is the least
/// heat loss it can incur?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    least_heat_loss(&Grid::parse_digits(input)?, 4, 10)
}
