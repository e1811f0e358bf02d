//! Token group parser

use intcode_spec::{Cell, Instruction, Opcode, BINARY_WIDTH};
use crate::error::{AssemblerError, MalformedReason, Result};
use crate::lexer::lex_cell;

/// Parse the token at `index` as a cell
pub fn parse_cell(index: usize, token: &str) -> Result<Cell> {
    lex_cell(token).ok_or_else(|| AssemblerError::MalformedInstruction {
        index,
        token: token.to_string(),
        reason: MalformedReason::NotAnInteger,
    })
}

/// Parse one instruction starting at `tokens[index]`
///
/// Returns the instruction and the number of tokens it consumed: 1 for the
/// halt sentinel, 4 for anything else.
pub fn parse_instruction(tokens: &[&str], index: usize) -> Result<(Instruction, usize)> {
    let head = tokens.get(index).copied().unwrap_or_default();
    let opcode = parse_cell(index, head)?;

    if opcode == Opcode::Halt.to_cell() {
        return Ok((Instruction::Halt, 1));
    }

    let remaining = tokens.len().saturating_sub(index);
    if remaining < BINARY_WIDTH {
        return Err(AssemblerError::MalformedInstruction {
            index,
            token: head.to_string(),
            reason: MalformedReason::Truncated {
                expected: BINARY_WIDTH,
                found: remaining,
            },
        });
    }

    let lhs = parse_cell(index + 1, tokens[index + 1])?;
    let rhs = parse_cell(index + 2, tokens[index + 2])?;
    let dst = parse_cell(index + 3, tokens[index + 3])?;

    Ok((Instruction::Binary { opcode, lhs, rhs, dst }, BINARY_WIDTH))
}
