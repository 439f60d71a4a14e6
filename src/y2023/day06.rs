// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 6: Wait For It](https://adventofcode.com/2023/day/6)

use itertools::Itertools;

use crate::{OrMalformed, PuzzleError, ints};

/// Count the whole numbers of milliseconds the button could be held for to beat `record` in a race
/// lasting `time` milliseconds.
///
/// Holding for `t` travels `t * (time - t)`, which is symmetric around `time / 2` and increasing
/// before it, so the shortest winning hold is found by binary search and mirrored.
pub fn ways_to_win(time: u64, record: u64) -> u64 {
    let travelled = |t: u64| t * (time - t);
    let half = time / 2;
    if travelled(half) <= record {
        return 0;
    }
    let (mut lo, mut hi) = (0, half);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if travelled(mid) > record {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time - 2 * lo + 1
}

fn line<'a>(input: &'a str, label: &str) -> Result<&'a str, PuzzleError> {
    input
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .or_malformed("missing times or distances")
}

/// Determine the number of ways you could beat the record in each race. What do you get if you
/// multiply these numbers together?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    let times = ints::<u64>(line(input, "Time:")?)?;
    let records = ints::<u64>(line(input, "Distance:")?)?;
    if times.len() != records.len() {
        return Err(PuzzleError::malformed("times and distances differ in number"));
    }
    Ok(times
        .into_iter()
        .zip_eq(records)
        .map(|(t, r)| ways_to_win(t, r))
        .product())
}

/// How many ways can you beat the record in this one much longer race?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let unkern = |s: &str| s.split_whitespace().collect::<String>().parse::<u64>();
    Ok(ways_to_win(
        unkern(line(input, "Time:")?)?,
        unkern(line(input, "Distance:")?)?,
    ))
}
