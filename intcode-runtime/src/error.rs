//! Runtime error types for Intcode

use intcode_assembler::AssemblerError;
use intcode_disassembler::DisassemblerError;
use intcode_spec::{Cell, IntcodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Parse error: {0}")]
    Assembler(#[from] AssemblerError),

    #[error("Spec error: {0}")]
    Spec(#[from] IntcodeError),

    #[error("Decode error: {0}")]
    Disassembler(#[from] DisassemblerError),

    #[error("Unknown opcode: {opcode}")]
    UnknownOpCode { opcode: Cell },

    #[error("Missing halt: instruction pointer {ip} ran off the end of {len} cells")]
    MissingHalt { ip: usize, len: usize },

    #[error("Arithmetic overflow: {op} {lhs}, {rhs}")]
    ArithmeticOverflow { op: &'static str, lhs: Cell, rhs: Cell },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Flat classification of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token failed to parse, or a binary instruction was cut short
    MalformedInstruction,
    /// No operation registered for a decoded opcode
    UnknownOpCode,
    /// A read or write outside program bounds
    BadMemoryAccess,
    /// Execution ran off the end of memory without halting
    MissingHalt,
    /// An operation overflowed a cell
    ArithmeticOverflow,
    Io,
    Other,
}

impl RuntimeError {
    /// Classify this error, looking through wrapped crate errors
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::Assembler(AssemblerError::MalformedInstruction { .. }) => {
                ErrorKind::MalformedInstruction
            }
            RuntimeError::Assembler(_) => ErrorKind::Other,
            RuntimeError::Spec(e) | RuntimeError::Disassembler(DisassemblerError::Spec(e)) => {
                if e.is_memory_fault() {
                    ErrorKind::BadMemoryAccess
                } else if e.is_io() {
                    ErrorKind::Io
                } else {
                    ErrorKind::Other
                }
            }
            RuntimeError::UnknownOpCode { .. } => ErrorKind::UnknownOpCode,
            RuntimeError::MissingHalt { .. } => ErrorKind::MissingHalt,
            RuntimeError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
            RuntimeError::IoError(_) => ErrorKind::Io,
            RuntimeError::Other(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
