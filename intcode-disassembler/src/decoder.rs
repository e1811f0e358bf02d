//! Instruction decoder

use intcode_spec::{Instruction, Opcode, Program, BINARY_WIDTH, HALT_WIDTH};
use crate::error::Result;

/// Decode the instruction at `ip`
///
/// Returns the instruction and its width. The halt value decodes to a 1-wide
/// instruction whatever operation a caller has registered for it; any other
/// value reads three more cells. Reads past the end of memory fail with
/// `BadMemoryAccess`.
pub fn decode(program: &Program, ip: usize) -> Result<(Instruction, usize)> {
    let opcode = program.read(ip)?;

    if opcode == Opcode::Halt.to_cell() {
        return Ok((Instruction::Halt, HALT_WIDTH));
    }

    let lhs = program.read(ip + 1)?;
    let rhs = program.read(ip + 2)?;
    let dst = program.read(ip + 3)?;

    Ok((Instruction::Binary { opcode, lhs, rhs, dst }, BINARY_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DisassemblerError;
    use intcode_spec::IntcodeError;

    #[test]
    fn test_decode_binary() {
        let program = Program::new(vec![1, 9, 10, 3, 99]);
        let (instr, width) = decode(&program, 0).unwrap();
        assert_eq!(instr, Instruction::add(9, 10, 3));
        assert_eq!(width, 4);
    }

    #[test]
    fn test_decode_halt_mid_program() {
        let program = Program::new(vec![1, 0, 0, 0, 99, 2, 0, 0, 0]);
        let (instr, width) = decode(&program, 4).unwrap();
        assert_eq!(instr, Instruction::Halt);
        assert_eq!(width, 1);
    }

    #[test]
    fn test_decode_unknown_opcode_is_still_four_wide() {
        let program = Program::new(vec![42, 1, 2, 3]);
        let (instr, width) = decode(&program, 0).unwrap();
        assert_eq!(instr.opcode(), 42);
        assert_eq!(width, 4);
    }

    #[test]
    fn test_decode_past_end() {
        let program = Program::new(vec![1, 0, 0, 0]);
        assert!(matches!(
            decode(&program, 4),
            Err(DisassemblerError::Spec(IntcodeError::BadMemoryAccess { address: 4, len: 4 }))
        ));
    }

    #[test]
    fn test_decode_truncated_operands() {
        let program = Program::new(vec![99, 1, 0]);
        match decode(&program, 1) {
            Err(DisassemblerError::Spec(IntcodeError::BadMemoryAccess { address, .. })) => {
                assert_eq!(address, 3);
            }
            other => panic!("expected BadMemoryAccess, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_reads_current_memory() {
        let mut program = Program::new(vec![1, 0, 0, 0, 2, 0, 0, 0]);
        program.write(4, 99).unwrap();
        let (instr, width) = decode(&program, 4).unwrap();
        assert!(instr.is_halt());
        assert_eq!(width, 1);
    }
}
