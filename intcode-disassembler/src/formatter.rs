//! Instruction formatting to assembly text

use intcode_spec::{Cell, Instruction, Opcode};

/// Format instruction as assembly text
///
/// Operand and result fields are addresses, shown in brackets:
/// `add [9], [10] -> [3]`. Opcodes outside the standard set print as `op<N>`.
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Halt => Opcode::Halt.mnemonic().to_string(),
        Instruction::Binary { opcode, lhs, rhs, dst } => {
            format!(
                "{} {}, {} -> {}",
                mnemonic(*opcode),
                format_addr(*lhs),
                format_addr(*rhs),
                format_addr(*dst)
            )
        }
    }
}

fn mnemonic(opcode: Cell) -> String {
    match Opcode::from_cell(opcode) {
        Some(op) => op.mnemonic().to_string(),
        None => format!("op{}", opcode),
    }
}

#[inline]
fn format_addr(addr: Cell) -> String {
    format!("[{}]", addr)
}
