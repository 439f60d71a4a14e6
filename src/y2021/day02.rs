// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 2: Dive!](https://adventofcode.com/2021/day/2)

use crate::{OrMalformed, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

fn command(line: &str) -> Result<Command, PuzzleError> {
    let (word, n) = line
        .split_once(' ')
        .or_malformed("expected a direction and a distance")?;
    let n = n.trim().parse()?;
    match word {
        "forward" => Ok(Command::Forward(n)),
        "down" => Ok(Command::Down(n)),
        "up" => Ok(Command::Up(n)),
        _ => Err(PuzzleError::malformed(format!("unknown command {word:?}"))),
    }
}

fn commands(input: &str) -> Result<Vec<Command>, PuzzleError> {
    input.lines().map(command).collect()
}

/// What do you get if you multiply your final horizontal position by your final depth?
pub fn part1(input: &str) -> Result<i64, PuzzleError> {
    let (horizontal, depth) =
        commands(input)?
            .into_iter()
            .fold((0, 0), |(h, d), command| match command {
                Command::Forward(n) => (h + n, d),
                Command::Down(n) => (h, d + n),
                Command::Up(n) => (h, d - n),
            });
    Ok(horizontal * depth)
}

/// Same as [part1], but `down` and `up` adjust the aim, and `forward` moves along it.
pub fn part2(input: &str) -> Result<i64, PuzzleError> {
    let (mut horizontal, mut depth, mut aim) = (0, 0, 0);
    for command in commands(input)? {
        match command {
            Command::Forward(n) => {
                horizontal += n;
                depth += aim * n;
            }
            Command::Down(n) => aim += n,
            Command::Up(n) => aim -= n,
        }
    }
    Ok(horizontal * depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day02.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(150));
        assert_eq!(part2(EXAMPLE), Ok(900));
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(
            part1("backward 3"),
            Err(PuzzleError::MalformedInput(_))
        ));
    }
}
