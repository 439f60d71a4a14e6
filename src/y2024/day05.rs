// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 5: Print Queue](https://adventofcode.com/2024/day/5)

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{OrMalformed, PuzzleError};

/// Page ordering rules, as pairs of pages where the first must be printed before the second
struct Rules(HashSet<(u32, u32)>);

impl Rules {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.0.contains(&(a, b)) {
            Ordering::Less
        } else if self.0.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn rule(line: &str) -> Result<(u32, u32), PuzzleError> {
    let (before, after) = line.split_once('|').or_malformed("expected before|after")?;
    Ok((before.trim().parse()?, after.trim().parse()?))
}

fn update(line: &str) -> Result<Vec<u32>, PuzzleError> {
    let pages = line
        .trim()
        .split(',')
        .map(|n| n.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;
    if pages.len() % 2 == 0 {
        return Err(PuzzleError::malformed("update has no middle page"));
    }
    Ok(pages)
}

fn print_queue(input: &str) -> Result<(Rules, Vec<Vec<u32>>), PuzzleError> {
    let (rules, updates) = input.split_once("\n\n").or_malformed("missing updates")?;
    Ok((
        Rules(rules.lines().map(rule).collect::<Result<_, _>>()?),
        updates.lines().map(update).collect::<Result<_, _>>()?,
    ))
}

/// Determine which updates are already in the correct order. What do you get if you add up the
/// middle page number from those correctly-ordered updates?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    let (rules, updates) = print_queue(input)?;
    Ok(updates
        .iter()
        .filter(|u| rules.is_ordered(u))
        .map(|u| u[u.len() / 2])
        .sum())
}

/// Find the updates which are not in the correct order. What do you get if you add up the middle
/// page numbers after correctly ordering just those updates?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    let (rules, updates) = print_queue(input)?;
    Ok(updates
        .into_iter()
        .filter(|u| !rules.is_ordered(u))
        .map(|mut u| {
            u.sort_by(|&a, &b| rules.compare(a, b));
            u[u.len() / 2]
        })
        .sum())
}
