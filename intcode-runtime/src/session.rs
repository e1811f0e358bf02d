//! Sessions: a parsed program plus the source it came from
//!
//! A session owns the pristine source text, the current (possibly mutated)
//! program, and the opcode table used to execute it. Repeated trials go
//! through `reset`, `set_cell`, `execute`, `read_cell`.

use crate::error::Result;
use crate::opcodes::OpcodeTable;
use crate::state::Outcome;
use crate::vm::{ExecutionResult, VMConfig, VM};
use intcode_assembler::assemble;
use intcode_spec::{Cell, Program};
use std::fmt;
use std::io::Read;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    source: String,
    separator: String,
    program: Program,
    table: OpcodeTable,
    config: VMConfig,
}

impl Session {
    /// Parse `source` with an empty opcode table
    pub fn new(source: impl Into<String>, separator: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let separator = separator.into();
        let program = assemble(&source, &separator)?;
        debug!(cells = program.len(), separator = %separator, "session created");

        Ok(Self {
            source,
            separator,
            program,
            table: OpcodeTable::new(),
            config: VMConfig::default(),
        })
    }

    /// Parse `source` and register ADD, MUL and HALT
    pub fn with_standard_set(
        source: impl Into<String>,
        separator: impl Into<String>,
    ) -> Result<Self> {
        let mut session = Self::new(source, separator)?;
        session.table = OpcodeTable::standard();
        Ok(session)
    }

    /// Read the whole source from `reader`, with the standard set registered
    pub fn from_reader<R: Read>(mut reader: R, separator: &str) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::with_standard_set(source, separator)
    }

    /// Register an operation, replacing any earlier one for `opcode`
    pub fn register<F>(&mut self, opcode: Cell, op: F) -> &mut Self
    where
        F: Fn(Cell, Cell) -> Result<Outcome> + Send + Sync + 'static,
    {
        self.table.register(opcode, op);
        self
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut OpcodeTable {
        &mut self.table
    }

    /// Replace the VM configuration used by `execute`
    pub fn with_config(mut self, config: VMConfig) -> Self {
        self.config = config;
        self
    }

    /// Discard all mutations by re-parsing the retained source
    ///
    /// The opcode table and configuration are kept.
    pub fn reset(&mut self) -> Result<()> {
        self.program = assemble(&self.source, &self.separator)?;
        debug!(cells = self.program.len(), "session reset");
        Ok(())
    }

    /// Overwrite one cell
    pub fn set_cell(&mut self, addr: usize, value: Cell) -> Result<()> {
        self.program.write(addr, value)?;
        Ok(())
    }

    /// Read one cell
    pub fn read_cell(&self, addr: usize) -> Result<Cell> {
        Ok(self.program.read(addr)?)
    }

    /// Run the current program from address 0 until halt or fault
    ///
    /// On a fault the program keeps whatever mutations happened before it.
    pub fn execute(&mut self) -> Result<ExecutionResult> {
        VM::new(&mut self.program, &self.table, self.config.clone()).run()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// SHA-256 of the current cell image, hex encoded
    pub fn fingerprint(&self) -> String {
        self.program.digest_hex()
    }
}

/// Renders the current program as comma-joined text
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}
