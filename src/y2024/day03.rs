// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 3: Mull It Over](https://adventofcode.com/2024/day/3)

use std::sync::LazyLock;

use regex::Regex;

use crate::PuzzleError;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("bad regex")
});

/// Sum the products of every `mul` instruction, skipping those disabled by `don't()` if
/// `conditionals` is set
fn scan(input: &str, conditionals: bool) -> Result<u64, PuzzleError> {
    let mut enabled = true;
    let mut total = 0;
    for cap in INSTRUCTION.captures_iter(input) {
        match &cap[0] {
            "do()" => enabled = true,
            "don't()" => enabled = !conditionals,
            _ if enabled => total += cap[1].parse::<u64>()? * cap[2].parse::<u64>()?,
            _ => (),
        }
    }
    Ok(total)
}

/// What do you get if you add up all of the results of the multiplications?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    scan(input, false)
}

/// Handle the new instructions; what do you get if you add up all of the results of just the
/// enabled multiplications?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    scan(input, true)
}
