// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Parser for the register and program listing that makes up a puzzle input

use chumsky::prelude::*;

use super::Registers;

type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(text::inline_whitespace()) }};
}

/// The starting registers and program of a 3-bit computer
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Listing {
    /// The initial register values
    pub registers: Registers,
    /// The program, each value of which is in the range `0..=7`
    pub program: Vec<u8>,
}

fn register<'a>(name: char) -> impl Parser<'a, &'a str, u64, RichErr<'a>> {
    just("Register")
        .ignore_then(padded!(just(name)))
        .ignore_then(just(':'))
        .ignore_then(padded!(text::int(10)))
        .try_map(|digits: &str, span| {
            digits
                .parse::<u64>()
                .map_err(|e| Rich::custom(span, format!("register value out of range: {e}")))
        })
        .then_ignore(text::newline())
        .labelled("register")
}

fn three_bit<'a>() -> impl Parser<'a, &'a str, u8, RichErr<'a>> {
    text::int(10)
        .try_map(|digits: &str, span| match digits.parse::<u8>() {
            Ok(n) if n < 8 => Ok(n),
            _ => Err(Rich::custom(
                span,
                format!("program values must be 3-bit, found {digits}"),
            )),
        })
        .labelled("3-bit number")
}

fn listing<'a>() -> impl Parser<'a, &'a str, Listing, RichErr<'a>> {
    let registers = register('A')
        .then(register('B'))
        .then(register('C'))
        .map(|((a, b), c)| Registers::new(a, b, c));

    let program = just("Program:")
        .ignore_then(
            padded!(three_bit())
                .separated_by(just(','))
                .at_least(1)
                .collect::<Vec<_>>(),
        )
        .labelled("program");

    registers
        .then_ignore(text::whitespace())
        .then(program)
        .then_ignore(text::whitespace())
        .then_ignore(end())
        .map(|(registers, program)| Listing {
            registers,
            program,
        })
}

/// Parse a listing like the following:
///
/// ```text
/// Register A: 729
/// Register B: 0
/// Register C: 0
///
/// Program: 0,1,5,4,3,0
/// ```
pub fn parse_listing(src: &str) -> Result<Listing, Vec<Rich<'_, char>>> {
    listing().parse(src).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_example() {
        let listing =
            parse_listing("Register A: 729\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0\n")
                .unwrap();
        assert_eq!(listing.registers, Registers::new(729, 0, 0));
        assert_eq!(listing.program, vec![0, 1, 5, 4, 3, 0]);
    }

    #[test]
    fn rejects_wide_values() {
        let errs =
            parse_listing("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 0,8\n")
                .unwrap_err();
        assert!(!errs.is_empty());
    }

    #[test]
    fn rejects_missing_register() {
        assert!(parse_listing("Register A: 1\nRegister C: 0\n\nProgram: 0,3\n").is_err());
    }
}
