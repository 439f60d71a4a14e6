// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 4: Scratchcards](https://adventofcode.com/2023/day/4)

use std::collections::HashSet;

use crate::{OrMalformed, PuzzleError, ints};

/// Count how many of the numbers you have are winning numbers
fn matches(line: &str) -> Result<usize, PuzzleError> {
    let (_, numbers) = line.split_once(':').or_malformed("missing card number")?;
    let (winning, have) = numbers.split_once('|').or_malformed("missing '|'")?;
    let winning: HashSet<u32> = ints(winning)?.into_iter().collect();
    Ok(ints::<u32>(have)?
        .into_iter()
        .filter(|n| winning.contains(n))
        .count())
}

fn cards(input: &str) -> Result<Vec<usize>, PuzzleError> {
    input.lines().map(matches).collect()
}

/// How many points are they worth in total?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    Ok(cards(input)?
        .into_iter()
        .filter(|&n| n > 0)
        .map(|n| 1u32 << (n - 1))
        .sum())
}

/// Process all of the original and copied scratchcards until no more scratchcards are won.
/// Including the original set of scratchcards, how many total scratchcards do you end up with?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    let cards = cards(input)?;
    let mut copies = vec![1u32; cards.len()];
    for (i, &wins) in cards.iter().enumerate() {
        let n = copies[i];
        for later in copies.iter_mut().skip(i + 1).take(wins) {
            *later += n;
        }
    }
    Ok(copies.iter().sum())
}
