// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 2: Cube Conundrum](https://adventofcode.com/2023/day/2)

use std::sync::LazyLock;

use regex::Regex;

use crate::{OrMalformed, PuzzleError};

static GAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Game (\d+):").expect("bad regex"));
static CUBES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) (red|green|blue)").expect("bad regex"));

/// The most cubes of each color shown at once during a game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

fn game(line: &str) -> Result<(u32, Cubes), PuzzleError> {
    let id = GAME.captures(line).or_malformed("expected \"Game {id}:\"")?;
    let mut most = Cubes::default();
    for cap in CUBES.captures_iter(line) {
        let n: u32 = cap[1].parse()?;
        let color = match &cap[2] {
            "red" => &mut most.red,
            "green" => &mut most.green,
            _ => &mut most.blue,
        };
        *color = (*color).max(n);
    }
    Ok((id[1].parse()?, most))
}

fn games(input: &str) -> Result<Vec<(u32, Cubes)>, PuzzleError> {
    input.lines().map(game).collect()
}

/// Determine which games would have been possible if the bag had been loaded with only 12 red
/// cubes, 13 green cubes, and 14 blue cubes. What is the sum of the IDs of those games?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    Ok(games(input)?
        .iter()
        .filter(|(_, c)| c.red <= 12 && c.green <= 13 && c.blue <= 14)
        .map(|(id, _)| id)
        .sum())
}

/// For each game, find the minimum set of cubes that must have been present. What is the sum of
/// the power of these sets?
pub fn part2(input: &str) -> Result<u32, PuzzleError> {
    Ok(games(input)?
        .iter()
        .map(|(_, c)| c.red * c.green * c.blue)
        .sum())
}
