//! Disassembler errors

use intcode_spec::IntcodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Decode fault: {0}")]
    Spec(#[from] IntcodeError),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
