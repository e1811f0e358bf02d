//! # Intcode Runtime
//!
//! Execute Intcode programs against a pluggable opcode table.
//!
//! ## Features
//!
//! - **Opcode table**: operations registered by value; ADD, MUL and HALT ship
//!   as the standard set, and any entry can be replaced or added
//! - **Execution engine**: fetch/decode/dispatch loop with bounds-checked
//!   memory and a tagged halt outcome
//! - **Sessions**: retain the source text so a mutated program can be reset
//!   for repeated trials
//! - **Search**: exhaustive (noun, verb) sweep, sequential or threaded
//!
//! ## Example
//!
//! ```rust
//! use intcode_runtime::Session;
//!
//! let mut session = Session::with_standard_set("1,0,0,0,99", ",").unwrap();
//! let result = session.execute().unwrap();
//! assert_eq!(session.to_string(), "2,0,0,0,99");
//! assert_eq!(result.steps, 2);
//! ```

pub mod error;
pub mod state;
pub mod opcodes;
pub mod vm;
pub mod session;
pub mod search;

pub use error::{ErrorKind, Result, RuntimeError};
pub use state::{HaltReason, Outcome, Step, VMState};
pub use opcodes::{OpcodeTable, Operation};
pub use vm::{ExecutionResult, TraceRow, VMConfig, VM};
pub use session::Session;
pub use search::{search, search_parallel, trial, SearchHit};

/// Simple execution helper
///
/// Parses comma-separated `source`, runs it with the standard opcode set and
/// returns the final program.
pub fn run(source: &str) -> Result<intcode_spec::Program> {
    let mut session = Session::with_standard_set(source, intcode_spec::DEFAULT_SEPARATOR)?;
    session.execute()?;
    Ok(session.into_program())
}
