// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 13: Transparent Origami](https://adventofcode.com/2021/day/13)

use std::collections::HashSet;

use crate::grid::{Point, SparseGrid};
use crate::{OrMalformed, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    Up(i64),
    Left(i64),
}

impl Fold {
    fn apply(self, p: Point) -> Point {
        match self {
            Fold::Up(y) if p.row > y => Point::new(2 * y - p.row, p.col),
            Fold::Left(x) if p.col > x => Point::new(p.row, 2 * x - p.col),
            _ => p,
        }
    }
}

fn dot(line: &str) -> Result<Point, PuzzleError> {
    let (x, y) = line.trim().split_once(',').or_malformed("expected x,y")?;
    Ok(Point::new(y.parse()?, x.parse()?))
}

fn fold(line: &str) -> Result<Fold, PuzzleError> {
    let (axis, n) = line
        .trim()
        .strip_prefix("fold along ")
        .and_then(|f| f.split_once('='))
        .or_malformed("expected \"fold along {axis}={n}\"")?;
    match axis {
        "y" => Ok(Fold::Up(n.parse()?)),
        "x" => Ok(Fold::Left(n.parse()?)),
        _ => Err(PuzzleError::malformed(format!("unknown axis {axis:?}"))),
    }
}

fn instructions(input: &str) -> Result<(HashSet<Point>, Vec<Fold>), PuzzleError> {
    let (dots, folds) = input.split_once("\n\n").or_malformed("missing fold instructions")?;
    Ok((
        dots.lines().map(dot).collect::<Result<_, _>>()?,
        folds.lines().map(fold).collect::<Result<_, _>>()?,
    ))
}

fn apply(dots: &HashSet<Point>, fold: Fold) -> HashSet<Point> {
    dots.iter().map(|&p| fold.apply(p)).collect()
}

/// How many dots are visible after completing just the first fold instruction on your transparent
/// paper?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    let (dots, folds) = instructions(input)?;
    let first = folds.first().or_malformed("no folds")?;
    Ok(apply(&dots, *first).len())
}

/// What code do you use to activate the infrared thermal imaging camera system?
///
/// The answer is the folded paper itself, rendered with `#` for dots and `.` for empty space,
/// trimmed to the area containing dots.
pub fn part2(input: &str) -> Result<String, PuzzleError> {
    let (mut dots, folds) = instructions(input)?;
    for fold in folds {
        dots = apply(&dots, fold);
    }
    let height = dots.iter().map(|p| p.row + 1).max().unwrap_or(0);
    let width = dots.iter().map(|p| p.col + 1).max().unwrap_or(0);
    let mut paper = SparseGrid::new(height, width);
    for p in dots {
        paper.insert(p, '#');
    }
    Ok(paper.to_string())
}
