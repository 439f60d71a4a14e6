// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 21: Keypad Conundrum](https://adventofcode.com/2024/day/21)

use std::collections::HashMap;

use crate::grid::{Direction, Point};
use crate::{OrMalformed, PuzzleError};

const NUMERIC: [&str; 4] = ["789", "456", "123", " 0A"];
const DIRECTIONAL: [&str; 2] = [" ^A", "<v>"];

fn position(keypad: &[&str], key: char) -> Option<Point> {
    keypad.iter().zip(0..).find_map(|(row, r)| {
        row.chars()
            .zip(0..)
            .find(|&(k, _)| k == key)
            .map(|(_, c)| Point::new(r, c))
    })
}

/// The key sequences that move an arm from `from` to `to` and press it, without ever pointing at
/// the gap in the keypad.
///
/// Zig-zagging is never better than making all of the moves along one axis at once, so the only
/// candidates are horizontal-first and vertical-first.
fn routes(keypad: &[&str], from: Point, to: Point) -> Vec<Vec<char>> {
    let gap = position(keypad, ' ');
    let delta = to - from;
    let horizontal = if delta.dcol < 0 { Direction::West } else { Direction::East };
    let vertical = if delta.drow < 0 { Direction::North } else { Direction::South };
    let h_moves = std::iter::repeat_n(horizontal.arrow(), delta.dcol.unsigned_abs() as usize);
    let v_moves = std::iter::repeat_n(vertical.arrow(), delta.drow.unsigned_abs() as usize);

    let mut routes: Vec<Vec<char>> = Vec::with_capacity(2);
    // horizontal first passes through the corner on the same row as `from`
    if gap != Some(Point::new(from.row, to.col)) {
        routes.push(h_moves.clone().chain(v_moves.clone()).chain(['A']).collect());
    }
    if gap != Some(Point::new(to.row, from.col)) {
        routes.push(v_moves.chain(h_moves).chain(['A']).collect());
    }
    routes.dedup();
    routes
}

struct Keypads {
    robots: usize,
    cache: HashMap<(char, char, usize), u64>,
}

impl Keypads {
    /// The number of presses a human needs to type `keys` on a directional keypad that is `depth`
    /// robots away
    fn sequence_cost(&mut self, keys: &[char], depth: usize) -> Result<u64, PuzzleError> {
        let mut at = 'A';
        let mut total = 0;
        for &key in keys {
            total += self.press_cost(at, key, depth)?;
            at = key;
        }
        Ok(total)
    }

    fn press_cost(&mut self, from: char, to: char, depth: usize) -> Result<u64, PuzzleError> {
        if depth == 0 {
            return Ok(1);
        }
        if let Some(&cost) = self.cache.get(&(from, to, depth)) {
            return Ok(cost);
        }
        let a = position(&DIRECTIONAL, from).or_malformed("not a directional key")?;
        let b = position(&DIRECTIONAL, to).or_malformed("not a directional key")?;
        let mut best = u64::MAX;
        for route in routes(&DIRECTIONAL, a, b) {
            best = best.min(self.sequence_cost(&route, depth - 1)?);
        }
        self.cache.insert((from, to, depth), best);
        Ok(best)
    }

    /// The length of the shortest sequence of button presses a human needs to type `code`
    fn code_cost(&mut self, code: &str) -> Result<u64, PuzzleError> {
        let mut at = position(&NUMERIC, 'A').or_malformed("numeric keypad has no A key")?;
        let mut total = 0;
        for key in code.chars() {
            let next = position(&NUMERIC, key)
                .filter(|_| key != ' ')
                .ok_or_else(|| PuzzleError::malformed(format!("{key:?} is not a numeric key")))?;
            let mut best = u64::MAX;
            for route in routes(&NUMERIC, at, next) {
                best = best.min(self.sequence_cost(&route, self.robots)?);
            }
            total += best;
            at = next;
        }
        Ok(total)
    }
}

/// The sum of the complexities of each code, with `robots` robots using directional keypads
/// between the human and the robot at the numeric keypad
pub fn complexity(input: &str, robots: usize) -> Result<u64, PuzzleError> {
    let mut keypads = Keypads {
        robots,
        cache: HashMap::new(),
    };
    let mut total = 0;
    for code in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let numeric: u64 = code.trim_end_matches('A').parse()?;
        total += keypads.code_cost(code)? * numeric;
    }
    Ok(total)
}

/// Find the fewest number of button presses you'll need to perform in order to cause the robot
/// in front of the door to type each code. What is the sum of the complexities of the five codes
/// on your list?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    complexity(input, 2)
}

/// This time, there are 25 robots using directional keypads. What is the sum of the complexities
/// of the five codes on your list?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    complexity(input, 25)
}
