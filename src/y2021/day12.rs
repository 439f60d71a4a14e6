// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 12: Passage Pathing](https://adventofcode.com/2021/day/12)

use std::collections::HashMap;

use crate::{OrMalformed, PuzzleError};

type Caves<'a> = HashMap<&'a str, Vec<&'a str>>;

fn caves(input: &str) -> Result<Caves<'_>, PuzzleError> {
    let mut caves = Caves::new();
    for line in input.lines() {
        let (a, b) = line.trim().split_once('-').or_malformed("expected a-b")?;
        caves.entry(a).or_default().push(b);
        caves.entry(b).or_default().push(a);
    }
    Ok(caves)
}

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

/// Count the paths from `cave` to `end`, given the small caves already on the path.
///
/// If `revisit` is true, one small cave other than `start` can still be visited a second time.
fn count_paths<'a>(
    caves: &Caves<'a>,
    cave: &'a str,
    visited: &mut Vec<&'a str>,
    revisit: bool,
) -> usize {
    if cave == "end" {
        return 1;
    }
    let Some(next) = caves.get(cave) else {
        return 0;
    };
    let mut paths = 0;
    for &n in next {
        if n == "start" {
            continue;
        }
        if !is_small(n) {
            paths += count_paths(caves, n, visited, revisit);
        } else if !visited.contains(&n) {
            visited.push(n);
            paths += count_paths(caves, n, visited, revisit);
            visited.pop();
        } else if revisit {
            paths += count_paths(caves, n, visited, false);
        }
    }
    paths
}

fn paths(input: &str, revisit: bool) -> Result<usize, PuzzleError> {
    let caves = caves(input)?;
    if !caves.contains_key("start") {
        return Err(PuzzleError::malformed("no start cave"));
    }
    Ok(count_paths(&caves, "start", &mut Vec::new(), revisit))
}

/// How many paths through this cave system are there that visit small caves at most once?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    paths(input, false)
}

/// Given these new rules, how many paths through this cave system are there?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    paths(input, true)
}
