// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 7: Camel Cards](https://adventofcode.com/2023/day/7)

use itertools::Itertools;

use crate::{OrMalformed, PuzzleError};

const RANKS: &str = "23456789TJQKA";
const JOKER_RANKS: &str = "J23456789TQKA";

/// Everything needed to sort a hand: the sizes of its groups of matching cards, largest first,
/// followed by the rank of each card in order
type Strength = (Vec<u8>, [u8; 5]);

fn strength(hand: &str, jokers: bool) -> Result<Strength, PuzzleError> {
    let order = if jokers { JOKER_RANKS } else { RANKS };
    let mut cards = [0; 5];
    let mut len = 0;
    for (slot, c) in cards.iter_mut().zip(hand.chars()) {
        *slot = order.find(c).or_malformed("unknown card")? as u8;
        len += 1;
    }
    if len != 5 || hand.len() != 5 {
        return Err(PuzzleError::malformed(format!("{hand:?} is not 5 cards")));
    }

    let joker_count = if jokers {
        cards.iter().filter(|&&c| c == 0).count() as u8
    } else {
        0
    };
    let mut groups: Vec<u8> = cards
        .iter()
        .filter(|&&c| !jokers || c != 0)
        .counts()
        .into_values()
        .map(|n| n as u8)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();
    match groups.first_mut() {
        Some(largest) => *largest += joker_count,
        None => groups.push(joker_count),
    }
    Ok((groups, cards))
}

fn hand(line: &str, jokers: bool) -> Result<(Strength, u64), PuzzleError> {
    let (cards, bid) = line.split_once(' ').or_malformed("expected hand and bid")?;
    Ok((strength(cards, jokers)?, bid.trim().parse()?))
}

fn winnings(input: &str, jokers: bool) -> Result<u64, PuzzleError> {
    let mut hands = input
        .lines()
        .map(|line| hand(line, jokers))
        .collect::<Result<Vec<_>, _>>()?;
    hands.sort_unstable();
    Ok(hands
        .iter()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum())
}

/// Find the rank of every hand in your set. What are the total winnings?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    winnings(input, false)
}

/// Using the new joker rule, find the rank of every hand in your set. What are the new total
/// winnings?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    winnings(input, true)
}
