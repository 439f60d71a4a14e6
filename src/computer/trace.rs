// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Tracing of executed instructions
use std::fmt::{self, Debug, Display};

use super::{Combo, Computer, OpCode, Registers};

#[derive(Clone, Copy, PartialEq, Eq)]
/// An opaque type containing information about what instruction was executed, which can be queried
/// with its various methods, or converted into a [String] using its [Display] impl.
pub struct TracedInstr {
    instr_ptr: usize,
    opcode: OpCode,
    operand: u8,
    resolved: u64,
    before: Registers,
    after: Registers,
    output: Option<u8>,
}

impl TracedInstr {
    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> usize {
        self.instr_ptr
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        self.opcode
    }

    /// Return the raw operand of the traced instruction
    pub fn operand(&self) -> u8 {
        self.operand
    }

    /// Return the value the operand resolved to: the register's value for combo operands that
    /// name a register, otherwise the operand itself
    pub fn resolved(&self) -> u64 {
        self.resolved
    }

    /// Return the registers before the instruction was executed
    pub fn registers_before(&self) -> Registers {
        self.before
    }

    /// Return the registers after the instruction was executed
    pub fn registers_after(&self) -> Registers {
        self.after
    }

    /// If the instruction output a value, return that value
    pub fn output(&self) -> Option<u8> {
        self.output
    }

    /// If the instruction was a `jnz`, return whether it jumped
    pub fn jumped(&self) -> Option<bool> {
        (self.opcode == OpCode::Jnz).then_some(self.before.a != 0)
    }
}

impl Computer<'_> {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    /// # use advent::computer::{Computer, Registers};
    /// let mut computer = Computer::new(Registers::new(10, 0, 0), [5, 0, 5, 1, 5, 4]);
    /// assert!(computer.start_trace().is_none());
    /// computer.run().unwrap();
    /// let trace = computer.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 3);
    /// assert_eq!(trace.0[2].output(), Some(2));
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Computer::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A log of instructions that a [Computer] has executed since a call to
/// [Computer::start_trace]
///
/// see [Computer::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn push(
        &mut self,
        instr_ptr: usize,
        opcode: OpCode,
        operand: u8,
        resolved: u64,
        before: Registers,
        after: Registers,
        output: Option<u8>,
    ) {
        self.0.push(TracedInstr {
            instr_ptr,
            opcode,
            operand,
            resolved,
            before,
            after,
            output,
        })
    }

    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    /// Everything output by the traced instructions, in order
    pub fn outputs(&self) -> impl Iterator<Item = u8> {
        self.0.iter().filter_map(TracedInstr::output)
    }
}

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("instr_ptr", &self.instr_ptr)
            .field("opcode", &self.opcode)
            .field("operand", &self.operand)
            .field("resolved", &self.resolved)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("output", &self.output)
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ran instruction at {:0>4}: ", self.instr_ptr)?;
        let (before, after) = (self.before, self.after);
        match self.opcode {
            OpCode::Adv | OpCode::Bst | OpCode::Out | OpCode::Bdv | OpCode::Cdv => {
                // only valid combo operands make it into a trace
                let combo = Combo::try_from(self.operand).map_err(|_| fmt::Error)?;
                write!(
                    f,
                    "[{} {combo} (resolves to {})] ",
                    self.opcode, self.resolved
                )?;
                match self.opcode {
                    OpCode::Adv => write!(f, "A: {} -> {}", before.a, after.a),
                    OpCode::Bst => write!(f, "B: {} -> {}", before.b, after.b),
                    OpCode::Bdv => write!(f, "B: {} -> {}", before.b, after.b),
                    OpCode::Cdv => write!(f, "C: {} -> {}", before.c, after.c),
                    _ => write!(f, "output {}", self.output.unwrap_or_default()),
                }
            }
            OpCode::Bxl => write!(
                f,
                "[bxl {}] B: {} -> {}",
                self.operand, before.b, after.b
            ),
            OpCode::Bxc => write!(f, "[bxc] B: {} -> {}", before.b, after.b),
            OpCode::Jnz => write!(
                f,
                "[jnz {}] A is {} ({})",
                self.operand,
                before.a,
                if before.a != 0 { "jumped" } else { "didn't jump" }
            ),
        }
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.0 {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}
