// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 2: Rock Paper Scissors](https://adventofcode.com/2022/day/2)

use crate::PuzzleError;

/// Parse a round into its two columns, as numbers from 0 to 2
fn round(line: &str) -> Result<(u8, u8), PuzzleError> {
    match line.trim().as_bytes() {
        &[them @ b'A'..=b'C', b' ', us @ b'X'..=b'Z'] => Ok((them - b'A', us - b'X')),
        _ => Err(PuzzleError::malformed(format!("bad round {line:?}"))),
    }
}

/// The score for a single round, given both shapes, as numbers from 0 (rock) to 2 (scissors).
///
/// Each shape beats the one before it, wrapping around.
const fn score(them: u8, us: u8) -> u32 {
    let outcome = (us + 4 - them) % 3; // 0: loss, 1: draw, 2: win
    (us as u32 + 1) + outcome as u32 * 3
}

fn total(input: &str, f: impl Fn((u8, u8)) -> u32) -> Result<u32, PuzzleError> {
    input.lines().map(|line| round(line).map(&f)).sum()
}

/// What would your total score be if everything goes exactly according to your strategy guide?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    total(input, |(them, us)| score(them, us))
}

/// Following the Elf's instructions for the second column, what would your total score be if
/// everything goes exactly according to your strategy guide?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    // X loses, Y draws, and Z wins, so the shape to play is offset from theirs
    total(input, |(them, outcome)| score(them, (them + outcome + 2) % 3))
}
