// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 7: Bridge Repair](https://adventofcode.com/2024/day/7)

use crate::{OrMalformed, PuzzleError, ints};

struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn equation(line: &str) -> Result<Equation, PuzzleError> {
    let (target, operands) = line.split_once(':').or_malformed("expected target: operands")?;
    let operands = ints(operands)?;
    if operands.is_empty() {
        return Err(PuzzleError::malformed("equation has no operands"));
    }
    Ok(Equation {
        target: target.parse()?,
        operands,
    })
}

/// Concatenate the digits of `a` and `b`
fn concat(a: u64, b: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(b.checked_ilog10().unwrap_or(0) + 1)?;
    a.checked_mul(shift)?.checked_add(b)
}

/// Whether some combination of operators, evaluated left to right, makes `operands` equal
/// `target` when applied to the running total `acc`.
///
/// Operands are positive, so no operator decreases the total, and any branch that overshoots is
/// dropped.
fn solvable(target: u64, acc: u64, operands: &[u64], concatenation: bool) -> bool {
    let Some((&next, rest)) = operands.split_first() else {
        return acc == target;
    };
    if acc > target {
        return false;
    }
    [
        acc.checked_add(next),
        acc.checked_mul(next),
        concatenation.then(|| concat(acc, next)).flatten(),
    ]
    .into_iter()
    .flatten()
    .any(|acc| solvable(target, acc, rest, concatenation))
}

fn calibration(input: &str, concatenation: bool) -> Result<u64, PuzzleError> {
    let equations = input.lines().map(equation).collect::<Result<Vec<_>, _>>()?;
    Ok(equations
        .iter()
        .filter(|e| solvable(e.target, e.operands[0], &e.operands[1..], concatenation))
        .map(|e| e.target)
        .sum())
}

/// Determine which equations could possibly be true. What is their total calibration result?
pub fn part1(input: &str) -> Result<u64, PuzzleError> {
    calibration(input, false)
}

/// Using your new knowledge of elephant hiding spots, determine which equations could possibly be
/// true. What is their total calibration result?
pub fn part2(input: &str) -> Result<u64, PuzzleError> {
    calibration(input, true)
}
