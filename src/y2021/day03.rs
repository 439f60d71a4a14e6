// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 3: Binary Diagnostic](https://adventofcode.com/2021/day/3)

use crate::{OrMalformed, PuzzleError};

fn report(input: &str) -> Result<Vec<&[u8]>, PuzzleError> {
    let lines: Vec<&[u8]> = input.lines().map(str::as_bytes).collect();
    let width = lines.first().or_malformed("empty report")?.len();
    if !(1..=32).contains(&width) {
        return Err(PuzzleError::malformed("lines must be 1 to 32 binary digits long"));
    }
    if lines
        .iter()
        .any(|line| line.len() != width || line.iter().any(|b| !matches!(b, b'0' | b'1')))
    {
        return Err(PuzzleError::malformed(
            "every line must have the same number of binary digits",
        ));
    }
    Ok(lines)
}

fn ones_in_column(lines: &[&[u8]], col: usize) -> usize {
    lines.iter().filter(|line| line[col] == b'1').count()
}

fn to_int(bits: &[u8]) -> u64 {
    bits.iter()
        .fold(0, |acc, &bit| (acc << 1) | u64::from(bit == b'1'))
}

/// What is the power consumption of the submarine?
///
/// Gamma takes the most common bit of each column, and epsilon the least common.
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    let lines = report(input)?;
    let width = lines[0].len();
    let gamma: Vec<u8> = (0..width)
        .map(|col| {
            if ones_in_column(&lines, col) * 2 > lines.len() {
                b'1'
            } else {
                b'0'
            }
        })
        .collect();
    let gamma = to_int(&gamma);
    let epsilon = !gamma & ((1 << width) - 1);
    Ok(gamma * epsilon)
}

/// Filter down to one line, keeping the lines with the most common bit in each column (or the
/// least common, if `most_common` is false). Ties keep `1` for the most common and `0` for the
/// least common.
fn rating(lines: &[&[u8]], most_common: bool) -> Result<u64, PuzzleError> {
    let mut candidates = lines.to_vec();
    let mut col = 0;
    while candidates.len() > 1 {
        if col == lines[0].len() {
            return Err(PuzzleError::NoSolution("duplicate lines left after filtering"));
        }
        let ones = ones_in_column(&candidates, col);
        let ones_win = ones * 2 >= candidates.len();
        let keep = if ones_win == most_common { b'1' } else { b'0' };
        candidates.retain(|line| line[col] == keep);
        col += 1;
    }
    let last = candidates
        .first()
        .ok_or(PuzzleError::NoSolution("no lines left after filtering"))?;
    Ok(to_int(last))
}

/// What is the life support rating of the submarine?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let lines = report(input)?;
    Ok(rating(&lines, true)? * rating(&lines, false)?)
}
