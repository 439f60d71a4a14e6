// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 3: Gear Ratios](https://adventofcode.com/2023/day/3)

use std::collections::HashMap;

use crate::PuzzleError;
use crate::grid::{Grid, Point};

/// A number in the engine schematic, along with the symbols next to it
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number {
    value: u32,
    symbols: Vec<(Point, char)>,
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

fn numbers(schematic: &Grid<char>) -> Vec<Number> {
    let mut numbers = Vec::new();
    for (r, row) in schematic.rows().enumerate() {
        let mut c = 0;
        while c < row.len() {
            if !row[c].is_ascii_digit() {
                c += 1;
                continue;
            }
            let start = c;
            let mut value = 0;
            while let Some(digit) = row.get(c).and_then(|ch| ch.to_digit(10)) {
                value = value * 10 + digit;
                c += 1;
            }
            let (r, start, end) = (r as i64, start as i64, c as i64);
            let mut symbols = Vec::new();
            for sr in r - 1..=r + 1 {
                for sc in start - 1..=end {
                    let p = Point::new(sr, sc);
                    if let Some(&ch) = schematic.get(p).filter(|&&ch| is_symbol(ch)) {
                        symbols.push((p, ch));
                    }
                }
            }
            numbers.push(Number { value, symbols });
        }
    }
    numbers
}

/// What is the sum of all of the part numbers in the engine schematic?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    let schematic = Grid::parse_chars(input)?;
    Ok(numbers(&schematic)
        .iter()
        .filter(|n| !n.symbols.is_empty())
        .map(|n| n.value)
        .sum())
}

/// What is the sum of all of the gear ratios in your engine schematic?
///
/// A gear is any `*` symbol that is adjacent to exactly two part numbers. Its gear ratio is the
/// result of multiplying those two numbers together.
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    let schematic = Grid::parse_chars(input)?;
    let mut stars: HashMap<Point, Vec<u32>> = HashMap::new();
    for n in numbers(&schematic) {
        for &(p, ch) in &n.symbols {
            if ch == '*' {
                stars.entry(p).or_default().push(n.value);
            }
        }
    }
    Ok(stars
        .values()
        .filter_map(|parts| match parts[..] {
            [a, b] => Some(a * b),
            _ => None,
        })
        .sum())
}
