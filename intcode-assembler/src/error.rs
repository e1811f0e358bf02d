//! Assembler errors

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Malformed instruction at token {index} ({token:?}): {reason}")]
    MalformedInstruction {
        index: usize,
        token: String,
        reason: MalformedReason,
    },

    #[error("Separator must not be empty")]
    EmptySeparator,
}

/// Why a token group was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The token is not a single integer literal
    NotAnInteger,
    /// Input ended inside a binary instruction
    Truncated { expected: usize, found: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NotAnInteger => write!(f, "not an integer"),
            MalformedReason::Truncated { expected, found } => {
                write!(f, "expected {} tokens, found {}", expected, found)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
