// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The 3-bit computer from [2024 day 17]
//!
//! The computer has three registers, `A`, `B`, and `C`, which can hold any integer, and a
//! program made up of 3-bit numbers. Each instruction is an [OpCode] followed by an operand, which
//! is either used as a literal, or interpreted as a [combo operand](Combo).
//!
//! # Example
//!
//! ```rust
//! use advent::computer::{Computer, Registers};
//!
//! let mut computer = Computer::new(Registers::new(729, 0, 0), vec![0, 1, 5, 4, 3, 0]);
//! assert_eq!(computer.run().unwrap(), vec![4, 6, 3, 5, 6, 3, 5, 2, 1, 0]);
//! ```
//!
//! [2024 day 17]: https://adventofcode.com/2024/day/17

use std::error::Error;
use std::fmt::{self, Display};
use std::io;

mod disasm;
mod parse;
pub mod trace;

pub use disasm::disassemble;
pub use parse::{Listing, parse_listing};
use trace::Trace;

/// The state of the computer, returned after each executed instruction
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    /// There are more instructions to execute
    Running,
    /// The instruction pointer has moved past the end of the program
    Halted,
}

#[derive(Debug)]
/// An error occured when executing an instruction
pub enum ComputerError {
    /// A program value above 7 was encountered where an opcode was expected
    UnknownOpcode(u8),
    /// Combo operand 7, or a program value above 7, was used as a combo operand
    InvalidComboOperand(u8),
    /// An error occured with the logger
    LoggerFailed(io::Error),
}

impl PartialEq for ComputerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnknownOpcode(lhs), Self::UnknownOpcode(rhs)) => lhs == rhs,
            (Self::InvalidComboOperand(lhs), Self::InvalidComboOperand(rhs)) => lhs == rhs,
            (Self::LoggerFailed(lhs), Self::LoggerFailed(rhs)) => lhs.kind() == rhs.kind(),
            _ => false,
        }
    }
}

impl Display for ComputerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputerError::UnknownOpcode(n) => write!(f, "encountered unknown opcode {n}"),
            ComputerError::InvalidComboOperand(n) => {
                write!(f, "encountered invalid combo operand {n}")
            }
            ComputerError::LoggerFailed(e) => write!(f, "logger encountered an error: {e}"),
        }
    }
}

impl Error for ComputerError {}

impl From<io::Error> for ComputerError {
    fn from(err: io::Error) -> Self {
        Self::LoggerFailed(err)
    }
}

/// The three registers of the computer
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Registers {
    /// Register `A`, the only one with a divide instruction of its own
    pub a: u64,
    /// Register `B`
    pub b: u64,
    /// Register `C`
    pub c: u64,
}

impl Registers {
    /// Shorthand to construct a set of [Registers]
    pub const fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }
}

impl Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A: {:<16} B: {:<16} C: {:<16}", self.a, self.b, self.c)
    }
}

/// The eight instructions
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OpCode {
    /// `A = A >> combo`
    Adv = 0,
    /// `B = B ^ literal`
    Bxl = 1,
    /// `B = combo & 7`
    Bst = 2,
    /// Jump to `literal` if `A` is not zero
    Jnz = 3,
    /// `B = B ^ C`, ignoring the operand
    Bxc = 4,
    /// Output `combo & 7`
    Out = 5,
    /// `B = A >> combo`
    Bdv = 6,
    /// `C = A >> combo`
    Cdv = 7,
}

impl OpCode {
    /// Whether the operand of this instruction is a [combo operand](Combo)
    pub const fn takes_combo(self) -> bool {
        matches!(
            self,
            OpCode::Adv | OpCode::Bst | OpCode::Out | OpCode::Bdv | OpCode::Cdv
        )
    }
}

impl TryFrom<u8> for OpCode {
    type Error = ComputerError;
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        match i {
            0 => Ok(OpCode::Adv),
            1 => Ok(OpCode::Bxl),
            2 => Ok(OpCode::Bst),
            3 => Ok(OpCode::Jnz),
            4 => Ok(OpCode::Bxc),
            5 => Ok(OpCode::Out),
            6 => Ok(OpCode::Bdv),
            7 => Ok(OpCode::Cdv),
            _ => Err(ComputerError::UnknownOpcode(i)),
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpCode::Adv => "adv",
            OpCode::Bxl => "bxl",
            OpCode::Bst => "bst",
            OpCode::Jnz => "jnz",
            OpCode::Bxc => "bxc",
            OpCode::Out => "out",
            OpCode::Bdv => "bdv",
            OpCode::Cdv => "cdv",
        })
    }
}

/// A combo operand
///
/// Operands 0 through 3 are literal values, and 4, 5, and 6 refer to registers `A`, `B`, and `C`.
/// Operand 7 is reserved, and is never valid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Combo {
    /// A literal value from 0 through 3
    Literal(u8),
    /// The value of register `A`
    A,
    /// The value of register `B`
    B,
    /// The value of register `C`
    C,
}

impl TryFrom<u8> for Combo {
    type Error = ComputerError;
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        match i {
            0..=3 => Ok(Combo::Literal(i)),
            4 => Ok(Combo::A),
            5 => Ok(Combo::B),
            6 => Ok(Combo::C),
            _ => Err(ComputerError::InvalidComboOperand(i)),
        }
    }
}

impl Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combo::Literal(n) => write!(f, "{n}"),
            Combo::A => write!(f, "a"),
            Combo::B => write!(f, "b"),
            Combo::C => write!(f, "c"),
        }
    }
}

impl Combo {
    fn resolve(self, registers: &Registers) -> u64 {
        match self {
            Combo::Literal(n) => u64::from(n),
            Combo::A => registers.a,
            Combo::B => registers.b,
            Combo::C => registers.c,
        }
    }
}

/// `A` divided by 2 to the power of `exp`, which is 0 once `exp` passes the width of `A`
fn shift_div(a: u64, exp: u64) -> u64 {
    u32::try_from(exp)
        .ok()
        .and_then(|exp| a.checked_shr(exp))
        .unwrap_or(0)
}

/// The 3-bit computer, which provides optional logging and tracing of executed instructions
pub struct Computer<'a> {
    registers: Registers,
    ip: usize,
    program: Vec<u8>,
    logger: Option<&'a mut (dyn io::Write + 'a)>,
    trace: Option<Trace>,
}

impl fmt::Debug for Computer<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Computer")
            .field("registers", &self.registers)
            .field("ip", &self.ip)
            .field("program", &self.program)
            .field("logging", &self.logger.is_some())
            .field("tracing", &self.trace.is_some())
            .finish()
    }
}

impl<'a> Computer<'a> {
    /// Create a new computer with the given starting registers and program
    pub fn new(registers: Registers, program: impl IntoIterator<Item = u8>) -> Self {
        Self {
            registers,
            ip: 0,
            program: program.into_iter().collect(),
            logger: None,
            trace: None,
        }
    }

    /// Log each executed instruction to the provided item that implements [`io::Write`].
    pub fn log_with(&mut self, logger: &'a mut (dyn io::Write + 'a)) {
        self.logger = Some(logger);
    }

    /// The current state of the registers
    pub fn registers(&self) -> Registers {
        self.registers
    }

    /// The position of the instruction pointer
    pub fn instr_ptr(&self) -> usize {
        self.ip
    }

    /// The loaded program
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Execute the instruction at the instruction pointer, pushing anything it outputs to
    /// `outputs`.
    ///
    /// Returns [State::Halted] without doing anything if the instruction pointer is past the end
    /// of the program, or if it points to an opcode with no operand after it.
    pub fn step(&mut self, outputs: &mut Vec<u8>) -> Result<State, ComputerError> {
        let (Some(&op_int), Some(&operand)) =
            (self.program.get(self.ip), self.program.get(self.ip + 1))
        else {
            return Ok(State::Halted);
        };
        let opcode = OpCode::try_from(op_int)?;
        let before = self.registers;

        /// Shorthand for the value of the operand as a combo operand
        macro_rules! combo {
            () => {{ Combo::try_from(operand)?.resolve(&self.registers) }};
        }

        let mut output = None;
        let mut next_ip = self.ip + 2;
        let resolved = match opcode {
            OpCode::Adv => {
                let exp = combo!();
                self.registers.a = shift_div(self.registers.a, exp);
                exp
            }
            OpCode::Bxl => {
                self.registers.b ^= u64::from(operand);
                u64::from(operand)
            }
            OpCode::Bst => {
                let val = combo!();
                self.registers.b = val & 7;
                val
            }
            OpCode::Jnz => {
                if self.registers.a != 0 {
                    next_ip = usize::from(operand);
                }
                u64::from(operand)
            }
            OpCode::Bxc => {
                self.registers.b ^= self.registers.c;
                u64::from(operand)
            }
            OpCode::Out => {
                let val = combo!();
                // masking to 3 bits guarantees the value fits
                let out = (val & 7) as u8;
                outputs.push(out);
                output = Some(out);
                val
            }
            OpCode::Bdv => {
                let exp = combo!();
                self.registers.b = shift_div(self.registers.a, exp);
                exp
            }
            OpCode::Cdv => {
                let exp = combo!();
                self.registers.c = shift_div(self.registers.a, exp);
                exp
            }
        };

        if let Some(ref mut logger) = self.logger {
            write!(logger, "ip: {:>4} | {} | ", self.ip, before)?;
            match output {
                Some(out) => writeln!(logger, "{opcode} {operand} => {out}")?,
                None => writeln!(logger, "{opcode} {operand}")?,
            }
        }
        if let Some(ref mut trace) = self.trace {
            trace.push(self.ip, opcode, operand, resolved, before, self.registers, output);
        }

        self.ip = next_ip;
        Ok(State::Running)
    }

    /// Execute until the program halts, returning everything it output.
    ///
    /// On error, it will return a [ComputerError] that reflects the error.
    pub fn run(&mut self) -> Result<Vec<u8>, ComputerError> {
        let mut outputs = Vec::new();
        while self.step(&mut outputs)? == State::Running {}
        Ok(outputs)
    }
}

/// Format output values the way the puzzle expects: separated by commas
pub fn format_output(output: &[u8]) -> String {
    use itertools::Itertools;
    output.iter().join(",")
}

/// Find the lowest positive value for register `A` which makes `program` output a copy of
/// itself, with `B` and `C` starting at zero.
///
/// This assumes the program is built like the puzzle inputs: a loop which shifts `A` right by 3
/// bits each time around, outputting one value based on `A`, until `A` is zero. That means the
/// last value output depends only on the highest 3 bits of `A`, so `A` can be built up 3 bits at a
/// time, matching the program from its end backwards. Returns `Ok(None)` if no value works.
pub fn find_quine(program: &[u8]) -> Result<Option<u64>, ComputerError> {
    fn search(program: &[u8], prefix: u64, matched: usize) -> Result<Option<u64>, ComputerError> {
        if matched == program.len() {
            return Ok(Some(prefix));
        }
        let target = &program[program.len() - matched - 1..];
        for bits in 0..8 {
            let Some(a) = prefix.checked_mul(8).map(|a| a | bits) else {
                return Ok(None);
            };
            if a == 0 {
                continue;
            }
            let output = Computer::new(Registers::new(a, 0, 0), program.iter().copied()).run()?;
            if output == target {
                if let Some(found) = search(program, a, matched + 1)? {
                    return Ok(Some(found));
                }
            }
        }
        Ok(None)
    }
    search(program, 0, 0)
}
