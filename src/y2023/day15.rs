// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 15: Lens Library](https://adventofcode.com/2023/day/15)

use crate::PuzzleError;

/// The Holiday ASCII String Helper algorithm
pub fn hash(s: &str) -> u8 {
    s.bytes()
        .fold(0u8, |h, b| h.wrapping_add(b).wrapping_mul(17))
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split(',')
}

/// Run the HASH algorithm on each step in the initialization sequence. What is the sum of the
/// results?
pub fn part1(input: &str) -> Result<u32, PuzzleError> {
    Ok(steps(input).map(|s| u32::from(hash(s))).sum())
}

/// With the help of an over-enthusiastic reindeer in a hard hat, follow the initialization
/// sequence. What is the focusing power of the resulting lens configuration?
pub fn part2(input: &str) -> Result<usize, PuzzleError> {
    let mut boxes: Vec<Vec<(&str, usize)>> = vec![Vec::new(); 256];
    for step in steps(input) {
        if let Some(label) = step.strip_suffix('-') {
            boxes[usize::from(hash(label))].retain(|&(l, _)| l != label);
        } else if let Some((label, focal)) = step.split_once('=') {
            let focal = focal.parse()?;
            let lenses = &mut boxes[usize::from(hash(label))];
            match lenses.iter_mut().find(|(l, _)| *l == label) {
                Some(lens) => lens.1 = focal,
                None => lenses.push((label, focal)),
            }
        } else {
            return Err(PuzzleError::malformed(format!("bad step {step:?}")));
        }
    }
    Ok(boxes
        .iter()
        .zip(1..)
        .flat_map(|(lenses, b)| lenses.iter().zip(1..).map(move |(&(_, f), slot)| b * slot * f))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    const EXAMPLE: &str = include_str!("../../tests/inputs/2023/day15.txt");

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE), Ok(1320));
        assert_eq!(part2(EXAMPLE), Ok(145));
    }

    #[test]
    fn hash_of_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
    }
}
