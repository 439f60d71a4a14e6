// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 20: Race Condition](https://adventofcode.com/2024/day/20)

use crate::grid::Grid;
use crate::{OrMalformed, PuzzleError};

/// Count the cheats that last at most `cheat` picoseconds and save at least `min_saved`.
///
/// There's only a single path through the racetrack, so a cheat is a pair of points on the path
/// within `cheat` steps of each other, and saves the difference between how far apart they are on
/// the path and how far apart they are in a straight line.
pub fn count_cheats(input: &str, cheat: u64, min_saved: u64) -> Result<usize, PuzzleError> {
    let track = Grid::parse_chars(input)?;
    let start = track.find(&'S').or_malformed("no start")?;
    let end = track.find(&'E').or_malformed("no end")?;
    let path = track
        .bfs(start, end, |&t| t != '#')
        .ok_or(PuzzleError::NoSolution("the racetrack has no end"))?;

    let mut count = 0;
    for (i, a) in path.iter().enumerate() {
        for (j, b) in path.iter().enumerate().skip(i + 1) {
            let shortcut = a.taxicab(*b);
            if shortcut <= cheat && (j - i) as u64 >= shortcut + min_saved {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// How many cheats would save you at least 100 picoseconds?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    count_cheats(input, 2, 100)
}

/// Find the best cheats using the updated cheating rules. How many cheats would save you at least
/// 100 picoseconds?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    count_cheats(input, 20, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2024/day20.txt");

    #[test]
    fn example() {
        assert_eq!(count_cheats(EXAMPLE, 2, 2), Ok(44));
        assert_eq!(count_cheats(EXAMPLE, 2, 64), Ok(1));
        assert_eq!(count_cheats(EXAMPLE, 20, 50), Ok(285));
        assert_eq!(count_cheats(EXAMPLE, 20, 76), Ok(3));
    }
}
