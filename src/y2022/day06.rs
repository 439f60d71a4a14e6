// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 6: Tuning Trouble](https://adventofcode.com/2022/day/6)

use crate::PuzzleError;

/// Find how many characters need to be processed before the first run of `len` distinct characters
/// is complete
pub fn find_marker(input: &str, len: usize) -> Result<usize, PuzzleError> {
    input
        .trim()
        .as_bytes()
        .windows(len)
        .position(|window| {
            let mut seen = 0u128;
            window.iter().all(|&b| {
                let bit = 1u128 << (b & 0x7f);
                let fresh = seen & bit == 0;
                seen |= bit;
                fresh
            })
        })
        .map(|i| i + len)
        .ok_or(PuzzleError::NoSolution("no marker in the datastream"))
}

/// How many characters need to be processed before the first start-of-packet marker is detected?
pub fn part1(input: &str) -> Result<usize, PuzzleError> {
    find_marker(input, 4)
}

/// How many characters need to be processed before the first start-of-message marker is detected?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    find_marker(input, 14)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2022/day06.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(7));
        assert_eq!(part2(EXAMPLE), Ok(19));
    }

    #[test]
    fn other_examples() {
        assert_eq!(part1("bvwbjplbgvbhsrlpgdmjqwftvncz"), Ok(5));
        assert_eq!(part1("nppdvjthqldpwncqrqmjrgmhlpqg"), Ok(6));
        assert_eq!(part2("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw"), Ok(26));
    }

    #[test]
    fn no_marker() {
        assert!(matches!(part1("aaaa"), Err(PuzzleError::NoSolution(_))));
    }
}
