// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 1: Trebuchet?!](https://adventofcode.com/2023/day/1)

use std::sync::LazyLock;

use regex::Regex;

use crate::{OrMalformed, PuzzleError};

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("bad regex"));

static SPELLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\d|{}", WORDS.join("|"))).expect("bad regex"));

/// Spelled-out digits can overlap, as in `eightwo`, so the last one is found by searching the
/// reversed line for reversed words
static SPELLED_REV: LazyLock<Regex> = LazyLock::new(|| {
    let reversed: Vec<String> = WORDS.iter().map(|w| w.chars().rev().collect()).collect();
    Regex::new(&format!(r"\d|{}", reversed.join("|"))).expect("bad regex")
});

fn digit_value(s: &str) -> u32 {
    match s.parse() {
        Ok(n) => n,
        Err(_) => WORDS
            .iter()
            .position(|w| *w == s || w.chars().rev().eq(s.chars()))
            .map_or(0, |i| i as u32 + 1),
    }
}

fn calibration(line: &str, first: &Regex, last: &Regex) -> Result<u32, PuzzleError> {
    let reversed: String = line.chars().rev().collect();
    let tens = first.find(line).or_malformed("line has no digits")?;
    let ones = last.find(&reversed).or_malformed("line has no digits")?;
    Ok(digit_value(tens.as_str()) * 10 + digit_value(ones.as_str()))
}

/// Consider your entire calibration document. What is the sum of all of the calibration values?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    input
        .lines()
        .map(|line| calibration(line, &DIGIT, &DIGIT))
        .sum()
}

/// Some of the digits are actually spelled out with letters. What is the sum of all of the
/// calibration values?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    input
        .lines()
        .map(|line| calibration(line, &SPELLED, &SPELLED_REV))
        .sum()
}
