//! # Error Types for Intcode

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntcodeError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Memory errors
    #[error("Bad memory access: address {address} outside program of {len} cells")]
    BadMemoryAccess { address: i64, len: usize },

    // Image errors
    #[error("Invalid memory image: {0}")]
    InvalidImage(#[from] bincode::Error),

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // General errors
    #[error("{0}")]
    Other(String),
}

impl IntcodeError {
    /// Check if this error was raised by a memory access
    pub fn is_memory_fault(&self) -> bool {
        matches!(self, IntcodeError::BadMemoryAccess { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, IntcodeError::IoError(_))
    }
}

pub type Result<T> = std::result::Result<T, IntcodeError>;
