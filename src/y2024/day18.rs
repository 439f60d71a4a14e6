// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 18: RAM Run](https://adventofcode.com/2024/day/18)

use crate::grid::{Point, SparseGrid};
use crate::{OrMalformed, PuzzleError};

fn byte(line: &str) -> Result<Point, PuzzleError> {
    let (x, y) = line.trim().split_once(',').or_malformed("expected x,y")?;
    Ok(Point::new(y.parse()?, x.parse()?))
}

fn bytes(input: &str) -> Result<Vec<Point>, PuzzleError> {
    input.lines().map(byte).collect()
}

/// The memory space, from `0,0` to `max,max`, after `fallen` bytes have been corrupted
fn memory(bytes: &[Point], max: i64, fallen: usize) -> SparseGrid<char> {
    let mut memory = SparseGrid::new(max + 1, max + 1);
    for &p in bytes.iter().take(fallen) {
        memory.insert(p, '#');
    }
    memory
}

/// The minimum number of steps from the top left to the bottom right, after `fallen` bytes have
/// fallen into a space from `0,0` to `max,max`
pub fn steps_to_exit(input: &str, max: i64, fallen: usize) -> Result<usize, PuzzleError> {
    let memory = memory(&bytes(input)?, max, fallen);
    memory
        .bfs(Point::new(0, 0), Point::new(max, max))
        .map(|path| path.len() - 1)
        .ok_or(PuzzleError::NoSolution("the exit is unreachable"))
}

/// The coordinates of the first byte that cuts off the exit, found by binary search over how many
/// bytes have fallen
pub fn first_blocker(input: &str, max: i64) -> Result<String, PuzzleError> {
    let bytes = bytes(input)?;
    let (start, end) = (Point::new(0, 0), Point::new(max, max));
    let reachable = |fallen| memory(&bytes, max, fallen).bfs(start, end).is_some();
    if reachable(bytes.len()) {
        return Err(PuzzleError::NoSolution("the exit is never cut off"));
    }
    // lo bytes leave the exit reachable, hi bytes don't
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reachable(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let blocker = bytes[hi - 1];
    Ok(format!("{},{}", blocker.col, blocker.row))
}

/// Simulate the first kilobyte (1024 bytes) falling onto your memory space. Afterward, what is the
/// minimum number of steps needed to reach the exit?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    steps_to_exit(input, 70, 1024)
}

/// What are the coordinates of the first byte that will prevent the exit from being reachable from
/// your starting position?
pub fn part2(input: &str) -> Result<String, PuzzleError> {
    first_blocker(input, 70)
}
