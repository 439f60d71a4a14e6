// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 14: Extended Polymerization](https://adventofcode.com/2021/day/14)

use std::collections::HashMap;

use itertools::{Itertools, MinMaxResult};

use crate::{OrMalformed, PuzzleError};

type Rules = HashMap<(char, char), char>;

fn rule(line: &str) -> Result<((char, char), char), PuzzleError> {
    let (pair, insert) = line.trim().split_once(" -> ").or_malformed("expected AB -> C")?;
    let pair = pair.chars().collect_tuple().or_malformed("rule must match a pair")?;
    let insert = insert.chars().exactly_one().ok().or_malformed("rule must insert one element")?;
    Ok((pair, insert))
}

/// Run `steps` steps of pair insertion, and return the quantity of the most common element minus
/// the quantity of the least common element.
///
/// The polymer grows exponentially, so only the number of each pair is tracked. Every element but
/// the last is the first element of exactly one pair.
pub fn polymerize(input: &str, steps: usize) -> Result<u64, PuzzleError> {
    let (template, rules) = input.split_once("\n\n").or_malformed("missing insertion rules")?;
    let template: Vec<char> = template.trim().chars().collect();
    let last = *template.last().or_malformed("empty template")?;
    let rules = rules.lines().map(rule).collect::<Result<Rules, _>>()?;

    let mut pairs: HashMap<(char, char), u64> = HashMap::new();
    for (&a, &b) in template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }
    for _ in 0..steps {
        let mut next: HashMap<(char, char), u64> = HashMap::with_capacity(pairs.len());
        for ((a, b), n) in pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }

    let mut elements: HashMap<char, u64> = HashMap::from([(last, 1)]);
    for ((a, _), n) in pairs {
        *elements.entry(a).or_default() += n;
    }
    Ok(match elements.values().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0,
    })
}

/// Apply 10 steps of pair insertion to the polymer template and find the most and least common
/// elements in the result. What do you get if you take the quantity of the most common element and
/// subtract the quantity of the least common element?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    polymerize(input, 10)
}

/// Apply 40 steps of pair insertion to the polymer template and find the most and least common
/// elements in the result. What do you get if you take the quantity of the most common element and
/// subtract the quantity of the least common element?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    polymerize(input, 40)
}
