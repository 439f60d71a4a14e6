// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 8: Seven Segment Search](https://adventofcode.com/2021/day/8)

use crate::{OrMalformed, PuzzleError};

/// A set of lit segments, with segment `a` as the lowest bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segments(u8);

impl Segments {
    fn parse(s: &str) -> Result<Self, PuzzleError> {
        s.bytes().try_fold(Self(0), |Self(bits), b| match b {
            b'a'..=b'g' => Ok(Self(bits | 1 << (b - b'a'))),
            _ => Err(PuzzleError::malformed(format!("{:?} is not a segment", b as char))),
        })
    }

    const fn len(self) -> u32 {
        self.0.count_ones()
    }

    const fn overlap(self, other: Self) -> u32 {
        (self.0 & other.0).count_ones()
    }
}

struct Entry {
    patterns: Vec<Segments>,
    output: Vec<Segments>,
}

fn entry(line: &str) -> Result<Entry, PuzzleError> {
    let (patterns, output) = line.split_once('|').or_malformed("missing '|'")?;
    let segments = |s: &str| {
        s.split_whitespace()
            .map(Segments::parse)
            .collect::<Result<Vec<_>, PuzzleError>>()
    };
    Ok(Entry {
        patterns: segments(patterns)?,
        output: segments(output)?,
    })
}

impl Entry {
    /// Find the pattern with `len` lit segments, which must be unique
    fn unique(&self, len: u32) -> Result<Segments, PuzzleError> {
        self.patterns
            .iter()
            .copied()
            .find(|s| s.len() == len)
            .or_malformed("missing a uniquely-sized pattern")
    }

    /// Decode the output value.
    ///
    /// Every digit can be told apart by its length and how many segments it shares with the
    /// patterns for 1 and 4, so the actual wiring never needs to be worked out.
    fn decode(&self) -> Result<u32, PuzzleError> {
        let one = self.unique(2)?;
        let four = self.unique(4)?;
        self.output.iter().try_fold(0, |acc, &digit| {
            let value = match (digit.len(), digit.overlap(one), digit.overlap(four)) {
                (2, _, _) => 1,
                (3, _, _) => 7,
                (4, _, _) => 4,
                (7, _, _) => 8,
                (5, 2, _) => 3,
                (5, _, 3) => 5,
                (5, _, _) => 2,
                (6, _, 4) => 9,
                (6, 2, _) => 0,
                (6, _, _) => 6,
                _ => return Err(PuzzleError::malformed(format!("{digit:?} is not a digit"))),
            };
            Ok(acc * 10 + value)
        })
    }
}

fn entries(input: &str) -> Result<Vec<Entry>, PuzzleError> {
    input.lines().map(entry).collect()
}

/// In the output values, how many times do digits 1, 4, 7, or 8 appear?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    Ok(entries(input)?
        .iter()
        .flat_map(|d| &d.output)
        .filter(|s| matches!(s.len(), 2 | 3 | 4 | 7))
        .count())
}

/// What do you get if you add up all of the output values?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    entries(input)?.iter().map(Entry::decode).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day08.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(26));
        assert_eq!(part2(EXAMPLE), Ok(61229));
    }

    #[test]
    fn single_entry() {
        let single = include_str!("../../tests/inputs/2021/day08-single.txt");
        assert_eq!(part2(single), Ok(5353));
    }

    #[test]
    fn bad_segment() {
        assert!(matches!(
            part1("ab cz | ab"),
            Err(PuzzleError::MalformedInput(_))
        ));
    }
}
