// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 8: Haunted Wasteland](https://adventofcode.com/2023/day/8)

use std::collections::HashMap;

use crate::{OrMalformed, PuzzleError};

struct Network<'a> {
    turns: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

fn node(line: &str) -> Result<(&str, (&str, &str)), PuzzleError> {
    let (name, next) = line.split_once(" = ").or_malformed("expected node = (left, right)")?;
    let (left, right) = next
        .trim()
        .strip_prefix('(')
        .and_then(|n| n.strip_suffix(')'))
        .and_then(|n| n.split_once(", "))
        .or_malformed("expected (left, right)")?;
    Ok((name, (left, right)))
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Self, PuzzleError> {
        let (turns, nodes) = input.split_once("\n\n").or_malformed("missing nodes")?;
        let turns = turns
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(false),
                'R' => Ok(true),
                _ => Err(PuzzleError::malformed(format!("{c:?} is not a direction"))),
            })
            .collect::<Result<Vec<_>, PuzzleError>>()?;
        if turns.is_empty() {
            return Err(PuzzleError::malformed("no directions"));
        }
        Ok(Self {
            turns,
            nodes: nodes.lines().map(node).collect::<Result<_, _>>()?,
        })
    }

    /// Count the steps from `start` until reaching a node for which `done` returns true
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<u64, PuzzleError> {
        let mut at = start;
        let mut steps = 0;
        for &right in self.turns.iter().cycle() {
            if done(at) {
                break;
            }
            let &(left, r) = self.nodes.get(at).or_malformed("path leads to a missing node")?;
            at = if right { r } else { left };
            steps += 1;
        }
        Ok(steps)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Starting at `AAA`, follow the left/right instructions. How many steps are required to reach
/// `ZZZ`?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    Network::parse(input)?.steps("AAA", |n| n == "ZZZ")
}

/// Simultaneously start on every node that ends with `A`. How many steps does it take before
/// you're only on nodes that end with `Z`?
///
/// Every ghost's path loops from its first `Z` node back to it in the same number of steps, so the
/// answer is the least common multiple of each path's length.
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let network = Network::parse(input)?;
    let mut lcm = 1;
    for &start in network.nodes.keys().filter(|n| n.ends_with('A')) {
        let steps = network.steps(start, |n| n.ends_with('Z'))?;
        lcm = lcm / gcd(lcm, steps) * steps;
    }
    Ok(lcm)
}
