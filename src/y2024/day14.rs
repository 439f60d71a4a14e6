// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 14: Restroom Redoubt](https://adventofcode.com/2024/day/14)

use std::sync::LazyLock;

use regex::Regex;

use crate::PuzzleError;
use crate::grid::{Point, Velocity};

static ROBOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").expect("bad regex"));

const HEIGHT: i64 = 103;
const WIDTH: i64 = 101;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Robot {
    pos: Point,
    vel: Velocity,
}

impl Robot {
    fn after(self, seconds: i64, height: i64, width: i64) -> Point {
        let p = self.pos + self.vel * seconds;
        Point::new(p.row.rem_euclid(height), p.col.rem_euclid(width))
    }
}

fn robot(line: &str) -> Result<Robot, PuzzleError> {
    let cap = ROBOT
        .captures(line)
        .ok_or_else(|| PuzzleError::malformed(format!("bad robot {line:?}")))?;
    let n = |i: usize| cap[i].parse::<i64>();
    Ok(Robot {
        pos: Point::new(n(2)?, n(1)?),
        vel: Velocity::new(n(4)?, n(3)?),
    })
}

fn robots(input: &str) -> Result<Vec<Robot>, PuzzleError> {
    input.lines().map(robot).collect()
}

/// The product of the number of robots in each quadrant after 100 seconds, in a space `height`
/// tiles tall and `width` tiles wide. Robots exactly in the middle aren't in any quadrant.
pub fn safety_factor(input: &str, height: i64, width: i64) -> Result<usize, PuzzleError> {
    let mut quadrants = [0; 4];
    for robot in robots(input)? {
        let p = robot.after(100, height, width);
        let (mid_r, mid_c) = (height / 2, width / 2);
        if p.row == mid_r || p.col == mid_c {
            continue;
        }
        quadrants[usize::from(p.row > mid_r) * 2 + usize::from(p.col > mid_c)] += 1;
    }
    Ok(quadrants.iter().product())
}

/// A value proportional to the variance of `xs`
fn spread(xs: impl Iterator<Item = i64>) -> i64 {
    let (n, sum, sum_sq) = xs.fold((0, 0, 0), |(n, s, sq), x| (n + 1, s + x, sq + x * x));
    n * sum_sq - sum * sum
}

/// Find the first second at which the robots are most tightly clustered.
///
/// Rows repeat every `height` seconds and columns every `width` seconds, so each axis is
/// minimized on its own, and the two are combined with the Chinese remainder theorem.
pub fn most_clustered(input: &str, height: i64, width: i64) -> Result<i64, PuzzleError> {
    let robots = robots(input)?;
    let best = |period: i64, axis: fn(Point) -> i64| {
        (0..period)
            .min_by_key(|&t| spread(robots.iter().map(|r| axis(r.after(t, height, width)))))
            .unwrap_or_default()
    };
    let row_t = best(height, |p| p.row);
    let col_t = best(width, |p| p.col);
    (0..height)
        .map(|k| col_t + k * width)
        .find(|t| t % height == row_t)
        .ok_or(PuzzleError::NoSolution("height and width are not coprime"))
}

/// What will the safety factor be after exactly 100 seconds have elapsed?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    safety_factor(input, HEIGHT, WIDTH)
}

/// What is the fewest number of seconds that must elapse for the robots to display the Easter
/// egg?
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    most_clustered(input, HEIGHT, WIDTH)
}
