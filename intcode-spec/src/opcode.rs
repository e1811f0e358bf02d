//! # Intcode Opcode Definitions
//!
//! The standard opcodes. Opcode tables are supplied by callers, so any cell
//! value may act as an opcode at runtime; this enum only names the baseline
//! set.
//!
//! Instruction width is a function of the opcode value alone: the halt value
//! is 1 cell wide, every other value is 4 cells wide. This holds even when a
//! caller registers a different operation for the halt value.

use crate::{Cell, BINARY_WIDTH, HALT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard opcodes
#[repr(i64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// ADD: [dst] = [lhs] + [rhs]
    Add = 1,
    /// MUL: [dst] = [lhs] * [rhs]
    Mul = 2,
    /// HALT: end of execution
    Halt = 99,
}

impl Opcode {
    /// All standard opcodes
    pub const ALL: [Opcode; 3] = [Opcode::Add, Opcode::Mul, Opcode::Halt];

    /// Convert to the cell value stored in memory
    #[inline]
    pub const fn to_cell(self) -> Cell {
        self as Cell
    }

    /// Look up a standard opcode by cell value
    pub const fn from_cell(value: Cell) -> Option<Self> {
        match value {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Mul),
            99 => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Mul => "mul",
            Opcode::Halt => "halt",
        }
    }

    /// Instruction width in cells
    #[inline]
    pub const fn width(self) -> usize {
        width_of(self.to_cell())
    }
}

/// Instruction width for an opcode value
#[inline]
pub const fn width_of(value: Cell) -> usize {
    if value == Opcode::Halt.to_cell() {
        HALT_WIDTH
    } else {
        BINARY_WIDTH
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl From<Opcode> for Cell {
    fn from(op: Opcode) -> Self {
        op.to_cell()
    }
}
