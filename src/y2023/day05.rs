// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 5: If You Give A Seed A Fertilizer](https://adventofcode.com/2023/day/5)

use std::ops::Range;

use crate::{OrMalformed, PuzzleError, ints};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Mapping {
    source: Range<u64>,
    dest: u64,
}

/// One of the almanac's maps, with its ranges sorted by source
#[derive(Debug, Clone, PartialEq, Eq)]
struct Map(Vec<Mapping>);

fn mapping(line: &str) -> Result<Mapping, PuzzleError> {
    match ints::<u64>(line)?[..] {
        [dest, src, len] => Ok(Mapping {
            source: src..src + len,
            dest,
        }),
        _ => Err(PuzzleError::malformed(format!("bad mapping {line:?}"))),
    }
}

impl Map {
    fn parse(section: &str) -> Result<Self, PuzzleError> {
        let mut mappings = section
            .lines()
            .skip(1)
            .map(mapping)
            .collect::<Result<Vec<_>, _>>()?;
        mappings.sort_by_key(|m| m.source.start);
        Ok(Self(mappings))
    }

    /// Map a range of values through this map, splitting it wherever it crosses the edge of a
    /// mapping. Values not covered by any mapping map to themselves.
    fn apply(&self, range: Range<u64>, out: &mut Vec<Range<u64>>) {
        let mut start = range.start;
        for m in &self.0 {
            if start >= range.end {
                break;
            }
            if m.source.end <= start {
                continue;
            }
            if m.source.start >= range.end {
                break;
            }
            if start < m.source.start {
                out.push(start..m.source.start);
                start = m.source.start;
            }
            let end = range.end.min(m.source.end);
            let shifted = m.dest + (start - m.source.start);
            out.push(shifted..shifted + (end - start));
            start = end;
        }
        if start < range.end {
            out.push(start..range.end);
        }
    }
}

fn lowest_location(
    input: &str,
    seeds: impl Fn(Vec<u64>) -> Vec<Range<u64>>,
) -> Result<u64, PuzzleError> {
    let mut sections = input.split("\n\n");
    let seed_line = sections.next().or_malformed("missing seeds")?;
    let seed_line = seed_line.strip_prefix("seeds:").or_malformed("missing seeds")?;
    let maps = sections.map(Map::parse).collect::<Result<Vec<_>, _>>()?;

    let mut ranges = seeds(ints(seed_line)?);
    for map in &maps {
        let mut next = Vec::with_capacity(ranges.len());
        for range in ranges {
            map.apply(range, &mut next);
        }
        ranges = next;
    }
    ranges
        .iter()
        .map(|r| r.start)
        .min()
        .ok_or(PuzzleError::NoSolution("no seeds"))
}

/// What is the lowest location number that corresponds to any of the initial seed numbers?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    lowest_location(input, |seeds| seeds.into_iter().map(|s| s..s + 1).collect())
}

/// Consider all of the initial seed numbers listed in the ranges on the first line of the almanac.
/// What is the lowest location number that corresponds to any of the initial seed numbers?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    lowest_location(input, |seeds| {
        seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .filter(|r| !r.is_empty())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day05.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(35));
        assert_eq!(part2(EXAMPLE), Ok(46));
    }

    #[test]
    fn split_range() {
        let map = Map::parse("seed-to-soil map:\n50 98 2\n52 50 48").unwrap();
        let mut out = Vec::new();
        map.apply(40..100, &mut out);
        assert_eq!(out, [40..50, 52..100, 50..52]);
    }
}
