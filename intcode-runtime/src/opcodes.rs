//! Opcode table
//!
//! Maps opcode values to operations. Tables are built by callers and handed
//! to the engine, so new operations never touch the decode loop.
//!
//! Every registered operation is binary: it receives the values at the two
//! operand addresses (both 0 for the 1-wide halt instruction) and returns an
//! [`Outcome`].

use crate::error::{Result, RuntimeError};
use crate::state::Outcome;
use intcode_spec::{Cell, Opcode};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A registered operation
pub type Operation = Arc<dyn Fn(Cell, Cell) -> Result<Outcome> + Send + Sync>;

/// Opcode -> operation registry
#[derive(Clone, Default)]
pub struct OpcodeTable {
    ops: HashMap<Cell, Operation>,
}

impl OpcodeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with ADD, MUL and HALT registered
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(Opcode::Add.to_cell(), add);
        table.register(Opcode::Mul.to_cell(), mul);
        table.register(Opcode::Halt.to_cell(), halt);
        table
    }

    /// Register an operation; replaces any earlier one for `opcode`
    pub fn register<F>(&mut self, opcode: Cell, op: F) -> &mut Self
    where
        F: Fn(Cell, Cell) -> Result<Outcome> + Send + Sync + 'static,
    {
        self.ops.insert(opcode, Arc::new(op));
        self
    }

    /// Remove an operation, returning whether one was registered
    pub fn unregister(&mut self, opcode: Cell) -> bool {
        self.ops.remove(&opcode).is_some()
    }

    /// Look up the operation for `opcode`
    pub fn lookup(&self, opcode: Cell) -> Result<&Operation> {
        self.ops
            .get(&opcode)
            .ok_or(RuntimeError::UnknownOpCode { opcode })
    }

    pub fn contains(&self, opcode: Cell) -> bool {
        self.ops.contains_key(&opcode)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Registered opcodes in ascending order
    pub fn opcodes(&self) -> Vec<Cell> {
        let mut codes: Vec<Cell> = self.ops.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpcodeTable")
            .field("opcodes", &self.opcodes())
            .finish()
    }
}

/// ADD: checked addition
pub fn add(a: Cell, b: Cell) -> Result<Outcome> {
    a.checked_add(b)
        .map(Outcome::Value)
        .ok_or(RuntimeError::ArithmeticOverflow { op: "add", lhs: a, rhs: b })
}

/// MUL: checked multiplication
pub fn mul(a: Cell, b: Cell) -> Result<Outcome> {
    a.checked_mul(b)
        .map(Outcome::Value)
        .ok_or(RuntimeError::ArithmeticOverflow { op: "mul", lhs: a, rhs: b })
}

/// HALT: always ends execution
pub fn halt(_: Cell, _: Cell) -> Result<Outcome> {
    Ok(Outcome::Halt)
}
