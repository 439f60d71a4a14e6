// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 3: Rucksack Reorganization](https://adventofcode.com/2022/day/3)

use itertools::Itertools;

use crate::PuzzleError;

/// A set of item types, stored as a bitmask indexed by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Items(u64);

impl Items {
    fn parse(s: &str) -> Result<Self, PuzzleError> {
        s.chars().try_fold(Self(0), |Self(bits), c| {
            let priority = match c {
                'a'..='z' => c as u32 - 'a' as u32 + 1,
                'A'..='Z' => c as u32 - 'A' as u32 + 27,
                _ => return Err(PuzzleError::malformed(format!("{c:?} is not an item"))),
            };
            Ok(Self(bits | 1 << priority))
        })
    }

    /// The priority of the only item in both sets
    fn shared_priority(self, other: Self) -> Result<u32, PuzzleError> {
        let shared = self.0 & other.0;
        if shared.count_ones() != 1 {
            return Err(PuzzleError::malformed(format!(
                "{} item types are shared instead of 1",
                shared.count_ones()
            )));
        }
        Ok(shared.trailing_zeros())
    }
}

fn compartments(line: &str) -> Result<u32, PuzzleError> {
    let line = line.trim();
    if line.len() % 2 != 0 {
        return Err(PuzzleError::malformed("compartments are uneven"));
    }
    let (left, right) = line.split_at(line.len() / 2);
    Items::parse(left)?.shared_priority(Items::parse(right)?)
}

/// Find the item type that appears in both compartments of each rucksack. What is the sum of the
/// priorities of those item types?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    input.lines().map(compartments).sum()
}

fn badge((a, b, c): (&str, &str, &str)) -> Result<u32, PuzzleError> {
    let ab = Items(Items::parse(a)?.0 & Items::parse(b)?.0);
    ab.shared_priority(Items::parse(c)?)
}

/// Find the item type that corresponds to the badges of each three-Elf group. What is the sum of
/// the priorities of those item types?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() % 3 != 0 {
        return Err(PuzzleError::malformed("elves are not in groups of three"));
    }
    lines.into_iter().tuples().map(badge).sum()
}
