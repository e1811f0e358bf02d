//! # Intcode Disassembler
//!
//! Decode instructions out of program memory and render them as text.
//!
//! Decoding is positional: the cell at the instruction pointer is the opcode,
//! and the halt value (`99`) is the only 1-wide instruction. The runtime uses
//! [`decode`] for every fetch; [`disassemble`] walks a program statically for
//! diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use intcode_spec::Program;
//! use intcode_disassembler::{decode, disassemble};
//!
//! let program = Program::new(vec![1, 0, 0, 0, 99]);
//! let (instr, width) = decode(&program, 0).unwrap();
//! assert_eq!(width, 4);
//! assert_eq!(instr.to_string(), "1,0,0,0");
//!
//! println!("{}", disassemble(&program));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, instructions, render};
pub use decoder::decode;
pub use formatter::format;
