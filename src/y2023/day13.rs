// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 13: Point of Incidence](https://adventofcode.com/2023/day/13)

use crate::PuzzleError;
use crate::grid::Grid;

/// Find the number of rows above a horizontal line of reflection, where exactly `smudges` cells
/// differ from their reflections
fn mirror_row(pattern: &Grid<char>, smudges: usize) -> Option<usize> {
    (1..pattern.height()).find(|&line| {
        let above = (0..line).rev();
        let below = line..pattern.height();
        above
            .zip(below)
            .map(|(a, b)| {
                pattern
                    .row(a)
                    .iter()
                    .zip(pattern.row(b))
                    .filter(|(x, y)| x != y)
                    .count()
            })
            .sum::<usize>()
            == smudges
    })
}

fn summarize(input: &str, smudges: usize) -> Result<usize, PuzzleError> {
    let mut total = 0;
    for block in input.split("\n\n") {
        let pattern = Grid::parse_chars(block.trim())?;
        total += match mirror_row(&pattern, smudges) {
            Some(rows) => 100 * rows,
            None => mirror_row(&pattern.transpose(), smudges)
                .ok_or(PuzzleError::NoSolution("pattern has no line of reflection"))?,
        };
    }
    Ok(total)
}

/// Find the line of reflection in each of the patterns in your notes. What number do you get
/// after summarizing all of your notes?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    summarize(input, 0)
}

/// In each pattern, fix the smudge and find the different line of reflection. What number do you
/// get after summarizing the new reflection line in each pattern in your notes?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    summarize(input, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day13.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(405));
        assert_eq!(part2(EXAMPLE), Ok(400));
    }

    #[test]
    fn no_reflection() {
        assert_eq!(
            part1("#.\n.."),
            Err(PuzzleError::NoSolution("pattern has no line of reflection"))
        );
    }
}
