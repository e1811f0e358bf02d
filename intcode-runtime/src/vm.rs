//! Execution engine for Intcode
//!
//! Fetch, decode, dispatch, advance. The instruction pointer only ever moves
//! forward by the width of the instruction just executed, so a run ends after
//! at most `program.len()` steps: either an operation signals halt, a fault
//! surfaces, or the pointer reaches the end of memory (`MissingHalt`).

use crate::error::{Result, RuntimeError};
use crate::opcodes::OpcodeTable;
use crate::state::{HaltReason, Outcome, Step, VMState};
use intcode_disassembler::decode;
use intcode_spec::{Cell, Instruction, Program};
use tracing::{debug, trace};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Log every executed instruction at trace level
    pub trace: bool,

    /// Collect an execution trace into the result
    pub record_trace: bool,
}

/// One executed instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    /// Step number, starting at 0
    pub step: u64,
    /// Address the instruction was fetched from
    pub ip: usize,
    /// Decoded instruction
    pub instruction: Instruction,
    /// Values passed to the operation
    pub operands: (Cell, Cell),
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed, including the halting one
    pub steps: u64,

    /// Address of the instruction that halted
    pub halt_ip: usize,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Execution trace (if enabled)
    pub trace: Vec<TraceRow>,
}

/// Intcode virtual machine
///
/// Borrows one program and one opcode table for a single execution pass.
pub struct VM<'a> {
    /// Instruction pointer and counters
    state: VMState,

    /// Memory being executed and mutated
    program: &'a mut Program,

    /// Operations to dispatch to
    table: &'a OpcodeTable,

    /// Configuration
    config: VMConfig,

    /// Execution trace (if enabled)
    trace: Vec<TraceRow>,
}

impl<'a> VM<'a> {
    /// Create a VM positioned at address 0
    pub fn new(program: &'a mut Program, table: &'a OpcodeTable, config: VMConfig) -> Self {
        Self {
            state: VMState::new(),
            program,
            table,
            config,
            trace: Vec::new(),
        }
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<Step> {
        if self.state.is_halted() {
            return Ok(Step::Halted);
        }

        let ip = self.state.ip;
        if ip >= self.program.len() {
            return Err(RuntimeError::MissingHalt {
                ip,
                len: self.program.len(),
            });
        }

        let (instr, width) = decode(self.program, ip)?;
        let op = self.table.lookup(instr.opcode()).map_err(|e| {
            debug!(ip, opcode = instr.opcode(), "no operation registered");
            e
        })?;

        let operands = match instr {
            Instruction::Halt => (0, 0),
            Instruction::Binary { lhs, rhs, .. } => {
                (self.program.load(lhs)?, self.program.load(rhs)?)
            }
        };

        if self.config.trace {
            trace!(step = self.state.steps, ip, %instr, a = operands.0, b = operands.1, "exec");
        }
        if self.config.record_trace {
            self.trace.push(TraceRow {
                step: self.state.steps,
                ip,
                instruction: instr,
                operands,
            });
        }

        let outcome = op(operands.0, operands.1)?;
        self.state.inc_steps();

        match (outcome, instr) {
            (Outcome::Halt, Instruction::Halt) => {
                self.state.halt(HaltReason::Halt);
                return Ok(Step::Halted);
            }
            (Outcome::Halt, Instruction::Binary { opcode, .. }) => {
                self.state.halt(HaltReason::Signal { opcode });
                return Ok(Step::Halted);
            }
            (Outcome::Value(value), Instruction::Binary { dst, .. }) => {
                self.program.store(dst, value)?;
            }
            // A halt instruction has no result field
            (Outcome::Value(_), Instruction::Halt) => {}
        }

        self.state.advance(width);
        Ok(Step::Continue)
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult> {
        while self.step()? == Step::Continue {}

        let halt_reason = self
            .state
            .halt_reason
            .ok_or_else(|| RuntimeError::Other("VM stopped without halting".to_string()))?;

        Ok(ExecutionResult {
            steps: self.state.steps,
            halt_ip: self.state.ip,
            halt_reason,
            trace: self.trace,
        })
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn program(&self) -> &Program {
        self.program
    }
}
