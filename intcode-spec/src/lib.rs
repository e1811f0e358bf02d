//! # Intcode Specification
//!
//! Core types shared by the Intcode toolchain.
//!
//! ## Key Features
//! - Signed 64-bit cells, no type tagging
//! - Flat, position-addressed memory sized to the parsed program
//! - Variable-width instructions: halt (1 cell), binary operations (4 cells)
//! - Standard opcodes: ADD (1), MUL (2), HALT (99)

pub mod config;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use config::{ConfigError, SearchConfig, MAX_LIMIT};
pub use error::{IntcodeError, Result};
pub use instruction::Instruction;
pub use opcode::{width_of, Opcode};
pub use program::Program;

/// A single memory cell
pub type Cell = i64;

/// Separator used by Intcode source files
pub const DEFAULT_SEPARATOR: &str = ",";

/// Width of the halt instruction in cells
pub const HALT_WIDTH: usize = 1;

/// Width of a binary instruction in cells: opcode, lhs, rhs, dst
pub const BINARY_WIDTH: usize = 4;
