// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 4: Camp Cleanup](https://adventofcode.com/2022/day/4)

use std::ops::RangeInclusive;

use crate::{OrMalformed, PuzzleError};

fn sections(s: &str) -> Result<RangeInclusive<u32>, PuzzleError> {
    let (start, end) = s.split_once('-').or_malformed("expected start-end")?;
    Ok(start.parse()?..=end.parse()?)
}

fn pair(line: &str) -> Result<(RangeInclusive<u32>, RangeInclusive<u32>), PuzzleError> {
    let (a, b) = line.trim().split_once(',').or_malformed("expected a pair of elves")?;
    Ok((sections(a)?, sections(b)?))
}

fn count_pairs(
    input: &str,
    pred: impl Fn(&RangeInclusive<u32>, &RangeInclusive<u32>) -> bool,
) -> Result<usize, PuzzleError> {
    let pairs = input.lines().map(pair).collect::<Result<Vec<_>, _>>()?;
    Ok(pairs.iter().filter(|(a, b)| pred(a, b)).count())
}

fn contains(outer: &RangeInclusive<u32>, inner: &RangeInclusive<u32>) -> bool {
    outer.contains(inner.start()) && outer.contains(inner.end())
}

/// In how many assignment pairs does one range fully contain the other?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    count_pairs(input, |a, b| contains(a, b) || contains(b, a))
}

/// In how many assignment pairs do the ranges overlap?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    count_pairs(input, |a, b| a.start() <= b.end() && b.start() <= a.end())
}
