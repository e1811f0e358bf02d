//! Intcode Assembler
//!
//! Parse separator-delimited Intcode source into a flat [`Program`].
//!
//! The halt numeral (`99`) acts as an in-stream sentinel: it is consumed as a
//! 1-cell instruction, every other opcode consumes a group of four tokens.
//!
//! ## Example
//!
//! ```rust
//! use intcode_assembler::assemble;
//!
//! let program = assemble("1,0,0,0,99", ",").unwrap();
//! assert_eq!(program.len(), 5);
//! ```
//!
//! [`Program`]: intcode_spec::Program

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, MalformedReason, Result};
pub use assembler::{assemble, assemble_default, tokenize};
pub use parser::{parse_cell, parse_instruction};
