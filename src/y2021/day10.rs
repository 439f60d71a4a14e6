// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 10: Syntax Scoring](https://adventofcode.com/2021/day/10)

use either::Either;

use crate::PuzzleError;

const fn closer(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// Check a line of chunks, returning either the first illegal character, or the closing characters
/// needed to complete the line
fn check(line: &str) -> Result<Either<char, Vec<char>>, PuzzleError> {
    let mut expected = Vec::new();
    for c in line.trim().chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(Either::Left(c));
            }
        } else {
            return Err(PuzzleError::malformed(format!("{c:?} is not a bracket")));
        }
    }
    expected.reverse();
    Ok(Either::Right(expected))
}

fn checked(input: &str) -> Result<Vec<Either<char, Vec<char>>>, PuzzleError> {
    input.lines().map(check).collect()
}

/// What is the total syntax error score for those errors?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    Ok(checked(input)?
        .into_iter()
        .filter_map(Either::left)
        .map(|c| match c {
            ')' => 3,
            ']' => 57,
            '}' => 1197,
            _ => 25137,
        })
        .sum())
}

fn completion_score(completion: &[char]) -> u64 {
    completion.iter().fold(0, |score, c| {
        score * 5
            + match c {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                _ => 4,
            }
    })
}

/// Find the completion string for each incomplete line, score the completion strings, and sort the
/// scores. What is the middle score?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let mut scores: Vec<u64> = checked(input)?
        .into_iter()
        .filter_map(Either::right)
        .filter(|completion| !completion.is_empty())
        .map(|completion| completion_score(&completion))
        .collect();
    if scores.is_empty() {
        return Err(PuzzleError::NoSolution("no incomplete lines"));
    }
    scores.sort_unstable();
    Ok(scores[scores.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2021/day10.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(26397));
        assert_eq!(part2(EXAMPLE), Ok(288957));
    }

    /// `{([(<{}[<>[]}>{[]{[(<()>` - Expected `]`, but found `}` instead.
    #[test]
    fn corrupt() {
        assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>"), Ok(Either::Left('}')));
    }

    /// `[({(<(())[]>[[{[]{<()<>>` - Complete by adding `}}]])})]`.
    #[test]
    fn incomplete() {
        let Ok(Either::Right(completion)) = check("[({(<(())[]>[[{[]{<()<>>") else {
            panic!("line should be incomplete");
        };
        assert_eq!(completion.iter().collect::<String>(), "}}]])})]");
        assert_eq!(completion_score(&completion), 288957);
    }
}
