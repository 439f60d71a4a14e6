// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 15: Warehouse Woes](https://adventofcode.com/2024/day/15)

use std::collections::HashSet;

use crate::grid::{Direction, Grid, Point};
use crate::{OrMalformed, PuzzleError};

struct Warehouse {
    map: Grid<char>,
    robot: Point,
}

impl Warehouse {
    /// Try to move the robot in `dir`, pushing any boxes in the way.
    ///
    /// Everything that would move is found first, spreading out from the robot, so that nothing
    /// moves if anything is blocked by a wall. Wide boxes always bring their other half along.
    fn push(&mut self, dir: Direction) {
        let mut moving = vec![self.robot];
        let mut seen = HashSet::from([self.robot]);
        let mut i = 0;
        while let Some(&p) = moving.get(i) {
            i += 1;
            let next = p.step(dir);
            let also = match self.map.get(next).copied() {
                Some('O') => vec![next],
                Some('[') => vec![next, next.step(Direction::East)],
                Some(']') => vec![next, next.step(Direction::West)],
                Some('.') => vec![],
                _ => return,
            };
            for q in also {
                if seen.insert(q) {
                    moving.push(q);
                }
            }
        }
        let cells: Vec<char> = moving.iter().map(|&p| self.map[p]).collect();
        for &p in &moving {
            self.map[p] = '.';
        }
        for (&p, c) in moving.iter().zip(cells) {
            self.map[p.step(dir)] = c;
        }
        self.robot = self.robot.step(dir);
    }

    /// The sum of every box's GPS coordinate, measured from its left edge for wide boxes
    fn gps_sum(&self) -> i64 {
        self.map
            .iter()
            .filter(|&(_, &c)| c == 'O' || c == '[')
            .map(|(p, _)| 100 * p.row + p.col)
            .sum()
    }
}

fn moves(input: &str) -> Result<Vec<Direction>, PuzzleError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_arrow(c).or_malformed("moves must be arrows"))
        .collect()
}

fn run(map: &str, moves: &str) -> Result<i64, PuzzleError> {
    let map = Grid::parse_chars(map)?;
    let robot = map.find(&'@').or_malformed("no robot")?;
    let mut warehouse = Warehouse { map, robot };
    for dir in self::moves(moves)? {
        warehouse.push(dir);
    }
    Ok(warehouse.gps_sum())
}

/// Widen everything except the robot, which just gets floor to its right
fn widen(map: &str) -> String {
    map.chars()
        .map(|c| match c {
            '#' => "##",
            'O' => "[]",
            '@' => "@.",
            '\n' => "\n",
            _ => "..",
        })
        .collect()
}

/// Predict the motion of the robot and boxes in the warehouse. After the robot is finished moving,
/// what is the sum of all boxes' GPS coordinates?
pub fn part1(input: &str) -> Result<i64, PuzzleError> {
    let (map, moves) = input.split_once("\n\n").or_malformed("missing moves")?;
    run(map, moves)
}

/// Predict the motion of the robot and boxes in this new, scaled-up warehouse. What is the sum of
/// all boxes' final GPS coordinates?
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    let (map, moves) = input.split_once("\n\n").or_malformed("missing moves")?;
    run(&widen(map.trim_end()), moves)
}
