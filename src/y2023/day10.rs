// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 10: Pipe Maze](https://adventofcode.com/2023/day/10)

use std::collections::HashSet;

use crate::grid::{DirSet, Direction, Grid, Point};
use crate::{OrMalformed, PuzzleError};

/// The directions a pipe connects to
fn connections(tile: char) -> DirSet {
    use Direction::*;
    let dirs: &[Direction] = match tile {
        '|' => &[North, South],
        '-' => &[East, West],
        'L' => &[North, East],
        'J' => &[North, West],
        '7' => &[South, West],
        'F' => &[South, East],
        _ => &[],
    };
    dirs.iter().copied().collect()
}

/// The main loop, with the starting tile replaced by whatever pipe fits its neighbors
struct Maze {
    pipes: Grid<DirSet>,
    path: Vec<Point>,
}

impl Maze {
    fn parse(input: &str) -> Result<Self, PuzzleError> {
        let tiles = Grid::parse_chars(input)?;
        let start = tiles.find(&'S').or_malformed("no starting tile")?;
        let mut pipes = tiles.map(|&t| connections(t));
        pipes[start] = Direction::ALL
            .into_iter()
            .filter(|&dir| {
                pipes
                    .get(start.step(dir))
                    .is_some_and(|p| p.contains(dir.opposite()))
            })
            .collect();
        if pipes[start].len() != 2 {
            return Err(PuzzleError::malformed(
                "starting tile does not connect to exactly two pipes",
            ));
        }

        let mut path = vec![start];
        let mut heading = pipes[start].iter().next().or_malformed("no way out of the start")?;
        let mut at = start.step(heading);
        while at != start {
            path.push(at);
            let pipe = pipes.get(at).copied().unwrap_or_default();
            if !pipe.contains(heading.opposite()) {
                return Err(PuzzleError::malformed(format!("loop is broken at {at:?}")));
            }
            heading = pipe
                .iter()
                .find(|&d| d != heading.opposite())
                .or_malformed("loop reaches a dead end")?;
            at = at.step(heading);
        }
        Ok(Self { pipes, path })
    }
}

/// How many steps along the loop does it take to get from the starting position to the point
/// farthest from the starting position?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    Ok(Maze::parse(input)?.path.len() / 2)
}

/// How many tiles are enclosed by the loop?
///
/// Scanning each row from the left, every loop tile with a northern connection is a crossing
/// between the inside and outside.
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let Maze { pipes, path } = Maze::parse(input)?;
    let on_loop: HashSet<Point> = path.into_iter().collect();
    let mut enclosed = 0;
    for r in 0..pipes.height() {
        let mut inside = false;
        for c in 0..pipes.width() {
            let p = Point::new(r as i64, c as i64);
            if on_loop.contains(&p) {
                if pipes[p].contains(Direction::North) {
                    inside = !inside;
                }
            } else if inside {
                enclosed += 1;
            }
        }
    }
    Ok(enclosed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farthest() {
        assert_eq!(part1(include_str!("../../tests/inputs/2023/day10-1.txt")), Ok(4));
        assert_eq!(part1(include_str!("../../tests/inputs/2023/day10-2.txt")), Ok(8));
    }

    #[test]
    fn enclosed() {
        let examples = [
            include_str!("../../tests/inputs/2023/day10-3.txt"),
            include_str!("../../tests/inputs/2023/day10-4.txt"),
            include_str!("../../tests/inputs/2023/day10-5.txt"),
            include_str!("../../tests/inputs/2023/day10-6.txt"),
        ];
        let results: Vec<_> = examples.into_iter().map(part2).collect();
        assert_eq!(results, [Ok(4), Ok(4), Ok(8), Ok(10)]);
    }

    #[test]
    fn start_shape() {
        let maze = Maze::parse(include_str!("../../tests/inputs/2023/day10-2.txt")).unwrap();
        assert_eq!(maze.pipes[Point::new(2, 0)], connections('F'));
    }

    #[test]
    fn ambiguous_start() {
        for maze in ["S-.\n...", ".|...\n.S-7.\n.|.|.\n.L-J.\n....."] {
            let Err(PuzzleError::MalformedInput(why)) = part1(maze) else {
                panic!("start of {maze:?} should be rejected");
            };
            assert_eq!(why, "starting tile does not connect to exactly two pipes");
        }
    }
}
