// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Disassembler-related functionality
//!
//! See [disassemble] for documentation

use std::fmt::Write;

use super::{Combo, OpCode};

/// Create a disassembly listing of a program, with one instruction per line.
///
/// Each line starts with the address of the instruction, followed by its mnemonic and operand.
/// Combo operands that refer to registers are shown as `a`, `b`, or `c`, and the ignored operand
/// of `bxc` is left out.
///
/// # Example
///
/// ```
/// use advent::computer::disassemble;
///
/// const EXPECTED_DISASM: &str = r#"
/// 0: adv 1
/// 2: out a
/// 4: bxc
/// 6: jnz 0
/// "#;
/// assert_eq!(disassemble(&[0, 1, 5, 4, 4, 3, 3, 0]), EXPECTED_DISASM.trim_ascii_start());
/// ```
///
/// # Caveats
///
/// Since `jnz` can jump to any address, including odd ones, instruction boundaries are ambiguous.
/// This function always assumes instructions start at even addresses, which is how every puzzle
/// input is laid out.
///
/// Anything that can't be disassembled is shown as a `data` directive: values above 7, reserved
/// combo operands, and a final opcode with no operand after it.
pub fn disassemble(program: &[u8]) -> String {
    let mut listing = String::new();
    for (i, pair) in program.chunks(2).enumerate() {
        let addr = i * 2;
        let line = match *pair {
            [op_int, operand] => match OpCode::try_from(op_int) {
                Ok(OpCode::Bxc) => format!("{}", OpCode::Bxc),
                Ok(op) if op.takes_combo() => match Combo::try_from(operand) {
                    Ok(combo) => format!("{op} {combo}"),
                    Err(_) => format!("data {op_int}, {operand}"),
                },
                Ok(op) => format!("{op} {operand}"),
                Err(_) => format!("data {op_int}, {operand}"),
            },
            [dangling] => format!("data {dangling}"),
            _ => unreachable!("chunks of 2 are never empty or longer than 2"),
        };
        writeln!(listing, "{addr}: {line}").expect("can write to String");
    }
    listing
}
