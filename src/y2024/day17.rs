// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 17: Chronospatial Computer](https://adventofcode.com/2024/day/17)
//!
//! The computer itself lives in [crate::computer], and can also be run with the `chronospatial`
//! binary.

use crate::PuzzleError;
use crate::computer::{Computer, Listing, find_quine, format_output, parse_listing};

fn listing(input: &str) -> Result<Listing, PuzzleError> {
    parse_listing(input).map_err(|errs| match errs.first() {
        Some(err) => {
            let span = err.span().into_range();
            PuzzleError::malformed(format!("{err} at {}..{}", span.start, span.end))
        }
        None => PuzzleError::malformed("could not parse the program"),
    })
}

/// Using the information provided by the debugger, initialize the registers to the given values,
/// then run the program. Once it halts, what do you get if you use commas to join the values it
/// output into a single string?
pub fn part1(input: &str) -> Result<String, PuzzleError> {
    let Listing { registers, program } = listing(input)?;
    let output = Computer::new(registers, program).run()?;
    Ok(format_output(&output))
}

/// What is the lowest positive initial value for register A that causes the program to output a
/// copy of itself?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    let Listing { program, .. } = listing(input)?;
    find_quine(&program)?.ok_or(PuzzleError::NoSolution("the program can't output itself"))
}
