//! VM state for Intcode

use intcode_spec::Cell;

/// What an operation asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Store the value at the instruction's result address
    Value(Cell),
    /// End execution successfully
    Halt,
}

/// Result of executing one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The instruction pointer advanced; keep going
    Continue,
    /// An operation signalled halt
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The halt instruction (99) signalled halt
    Halt,
    /// A binary instruction's operation signalled halt
    Signal { opcode: Cell },
}

/// VM state
#[derive(Debug, Clone, Default)]
pub struct VMState {
    /// Instruction pointer
    pub ip: usize,

    /// Instructions executed so far
    pub steps: u64,

    /// Halt reason, once halted
    pub halt_reason: Option<HaltReason>,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }

    /// Move past an instruction of `width` cells
    #[inline]
    pub fn advance(&mut self, width: usize) {
        self.ip += width;
    }

    #[inline]
    pub fn inc_steps(&mut self) {
        self.steps += 1;
    }
}
