// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 5: Supply Stacks](https://adventofcode.com/2022/day/5)

use crate::{OrMalformed, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn stacks(drawing: &str) -> Result<Vec<Vec<char>>, PuzzleError> {
    let mut lines = drawing.lines().rev();
    let labels = lines.next().or_malformed("missing stack labels")?;
    let mut stacks = vec![Vec::new(); labels.split_whitespace().count()];
    for line in lines {
        for (stack, c) in stacks.iter_mut().zip(line.chars().skip(1).step_by(4)) {
            if c.is_ascii_uppercase() {
                stack.push(c);
            }
        }
    }
    Ok(stacks)
}

fn step(line: &str) -> Result<Move, PuzzleError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let [_, count, _, from, _, to] = words[..] else {
        return Err(PuzzleError::malformed(format!("bad move {line:?}")));
    };
    let (from, to): (usize, usize) = (from.parse()?, to.parse()?);
    if from == 0 || to == 0 {
        return Err(PuzzleError::malformed("stacks are numbered from 1"));
    }
    Ok(Move {
        count: count.parse()?,
        from: from - 1,
        to: to - 1,
    })
}

/// Run the rearrangement procedure and return the crate on top of each stack.
///
/// If `in_order` is set, crates moved together keep their order, otherwise they're moved one at a
/// time, reversing them.
fn rearrange(input: &str, in_order: bool) -> Result<String, PuzzleError> {
    let (drawing, moves) = input.split_once("\n\n").or_malformed("missing procedure")?;
    let mut stacks = stacks(drawing)?;
    for line in moves.lines() {
        let Move { count, from, to } = step(line)?;
        let source = stacks.get_mut(from).or_malformed("no such stack")?;
        let at = source
            .len()
            .checked_sub(count)
            .or_malformed("not enough crates to move")?;
        let mut moved = source.split_off(at);
        if !in_order {
            moved.reverse();
        }
        stacks.get_mut(to).or_malformed("no such stack")?.extend(moved);
    }
    Ok(stacks.iter().filter_map(|s| s.last()).collect())
}

/// After the rearrangement procedure completes, what crate ends up on top of each stack?
pub fn part1(input: &str) -> Result<String, PuzzleError> {
    rearrange(input, false)
}

/// After the rearrangement procedure completes, what crate ends up on top of each stack, now that
/// the crane can move multiple crates at once?
pub fn part2(input: &str) -> Result<String, PuzzleError> {
    rearrange(input, true)
}
