//! Intcode Instructions
//!
//! An instruction is a view over a run of cells, computed on demand from
//! memory at an instruction pointer.
//!
//! ## Instruction Formats
//! - Halt:   [99]
//! - Binary: [opcode][lhs][rhs][dst]
//!
//! `lhs` and `rhs` are operand addresses: the operation reads the cells they
//! point at. `dst` is the address receiving the result.

use crate::opcode::Opcode;
use crate::{Cell, BINARY_WIDTH, HALT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intcode instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// HALT: end of execution
    Halt,

    /// Binary operation: [dst] = op([lhs], [rhs])
    Binary { opcode: Cell, lhs: Cell, rhs: Cell, dst: Cell },
}

impl Instruction {
    /// Build a binary instruction
    ///
    /// The halt value decodes as a 1-wide instruction, so `opcode` must not be
    /// 99; a halt opcode here yields `Instruction::Halt`.
    pub fn binary(opcode: Cell, lhs: Cell, rhs: Cell, dst: Cell) -> Self {
        if opcode == Opcode::Halt.to_cell() {
            Instruction::Halt
        } else {
            Instruction::Binary { opcode, lhs, rhs, dst }
        }
    }

    /// Shorthand for an ADD instruction
    pub fn add(lhs: Cell, rhs: Cell, dst: Cell) -> Self {
        Self::binary(Opcode::Add.to_cell(), lhs, rhs, dst)
    }

    /// Shorthand for a MUL instruction
    pub fn mul(lhs: Cell, rhs: Cell, dst: Cell) -> Self {
        Self::binary(Opcode::Mul.to_cell(), lhs, rhs, dst)
    }

    /// Opcode cell value
    pub fn opcode(&self) -> Cell {
        match self {
            Instruction::Halt => Opcode::Halt.to_cell(),
            Instruction::Binary { opcode, .. } => *opcode,
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        match self {
            Instruction::Halt => HALT_WIDTH,
            Instruction::Binary { .. } => BINARY_WIDTH,
        }
    }

    pub fn is_halt(&self) -> bool {
        matches!(self, Instruction::Halt)
    }

    /// The standard opcode, if this instruction uses one
    pub fn standard_opcode(&self) -> Option<Opcode> {
        Opcode::from_cell(self.opcode())
    }

    /// Cells occupied by this instruction, in memory order
    pub fn cells(&self) -> Vec<Cell> {
        match *self {
            Instruction::Halt => vec![Opcode::Halt.to_cell()],
            Instruction::Binary { opcode, lhs, rhs, dst } => vec![opcode, lhs, rhs, dst],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Halt => write!(f, "{}", Opcode::Halt.to_cell()),
            Instruction::Binary { opcode, lhs, rhs, dst } => {
                write!(f, "{},{},{},{}", opcode, lhs, rhs, dst)
            }
        }
    }
}
