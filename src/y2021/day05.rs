// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 5: Hydrothermal Venture](https://adventofcode.com/2021/day/5)

use itertools::Itertools;

use crate::grid::{Point, Velocity};
use crate::{OrMalformed, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vent {
    start: Point,
    end: Point,
}

fn point(s: &str) -> Result<Point, PuzzleError> {
    let (x, y) = s.trim().split_once(',').or_malformed("expected x,y")?;
    Ok(Point::new(y.parse()?, x.parse()?))
}

fn vent(line: &str) -> Result<Vent, PuzzleError> {
    let (start, end) = line.split_once("->").or_malformed("expected x1,y1 -> x2,y2")?;
    Ok(Vent {
        start: point(start)?,
        end: point(end)?,
    })
}

impl Vent {
    fn is_orthogonal(&self) -> bool {
        self.start.row == self.end.row || self.start.col == self.end.col
    }

    /// Every point along the line, which must be horizontal, vertical, or diagonal at 45°
    fn points(&self) -> Result<impl Iterator<Item = Point>, PuzzleError> {
        let Velocity { drow, dcol } = self.end - self.start;
        if drow != 0 && dcol != 0 && drow.abs() != dcol.abs() {
            return Err(PuzzleError::malformed(format!(
                "{self:?} is not horizontal, vertical, or diagonal"
            )));
        }
        let step = Velocity::new(drow.signum(), dcol.signum());
        let len = drow.abs().max(dcol.abs());
        let start = self.start;
        Ok((0..=len).map(move |i| start + step * i))
    }
}

fn overlaps(input: &str, diagonals: bool) -> Result<usize, PuzzleError> {
    let vents = input.lines().map(vent).collect::<Result<Vec<_>, _>>()?;
    let mut covered = Vec::new();
    for vent in vents.iter().filter(|v| diagonals || v.is_orthogonal()) {
        covered.extend(vent.points()?);
    }
    Ok(covered.into_iter().counts().values().filter(|&&n| n >= 2).count())
}

/// Consider only horizontal and vertical lines. At how many points do at least two lines overlap?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    overlaps(input, false)
}

/// Consider all of the lines. At how many points do at least two lines overlap?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    overlaps(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day05.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(5));
        assert_eq!(part2(EXAMPLE), Ok(12));
    }

    #[test]
    fn diagonal_points() {
        let v = vent("9,7 -> 7,9").unwrap();
        assert_eq!(
            v.points().unwrap().collect::<Vec<_>>(),
            [Point::new(7, 9), Point::new(8, 8), Point::new(9, 7)]
        );
    }
}
