// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 6: Lanternfish](https://adventofcode.com/2021/day/6)

use crate::PuzzleError;

/// Count the lanternfish after `days` days.
///
/// Fish with the same timer behave identically, so only the number of fish with each timer value
/// is tracked. A fish at 0 resets to 6 and spawns a new fish at 8.
pub fn fish_after(input: &str, days: usize) -> Result<u64, PuzzleError> {
    let mut cohorts = [0u64; 9];
    for timer in input.trim().split(',') {
        let timer: usize = timer.parse()?;
        *cohorts
            .get_mut(timer)
            .ok_or_else(|| PuzzleError::malformed(format!("timer {timer} is above 8")))? += 1;
    }
    for _ in 0..days {
        cohorts.rotate_left(1);
        cohorts[6] += cohorts[8];
    }
    Ok(cohorts.iter().sum())
}

/// How many lanternfish would there be after 80 days?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    fish_after(input, 80)
}

/// How many lanternfish would there be after 256 days?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    fish_after(input, 256)
}
