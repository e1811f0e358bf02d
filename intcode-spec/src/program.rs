//! # Program Store
//!
//! The flat array of cells an Intcode program runs in. Its length is fixed
//! once built; execution only mutates values in place.
//!
//! Every access goes through a bounds-checked accessor returning `Result`.
//! Addresses taken from cell values (operand and result fields) may be
//! negative, and are rejected the same way as addresses past the end.

use crate::error::{IntcodeError, Result};
use crate::instruction::Instruction;
use crate::Cell;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// Intcode memory image
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    cells: Vec<Cell>,
}

impl Program {
    /// Create a program from raw cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create a program by flattening instructions
    pub fn from_instructions<'a, I>(instructions: I) -> Self
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        let mut program = Self::default();
        for instr in instructions {
            program.push_instruction(instr);
        }
        program
    }

    /// Append an instruction's cells
    pub fn push_instruction(&mut self, instr: &Instruction) {
        self.cells.extend(instr.cells());
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, in address order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consume the program, yielding its final memory
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Check an address against the program bounds
    #[inline]
    pub fn check(&self, addr: usize) -> Result<usize> {
        if addr < self.cells.len() {
            Ok(addr)
        } else {
            Err(self.fault(i64::try_from(addr).unwrap_or(i64::MAX)))
        }
    }

    /// Resolve a cell value used as an address
    #[inline]
    pub fn resolve(&self, addr: Cell) -> Result<usize> {
        match usize::try_from(addr) {
            Ok(index) if index < self.cells.len() => Ok(index),
            _ => Err(self.fault(addr)),
        }
    }

    /// Read the cell at `addr`
    #[inline]
    pub fn read(&self, addr: usize) -> Result<Cell> {
        let index = self.check(addr)?;
        Ok(self.cells[index])
    }

    /// Overwrite the cell at `addr`
    #[inline]
    pub fn write(&mut self, addr: usize, value: Cell) -> Result<()> {
        let index = self.check(addr)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Read through an address held in a cell (operand fetch)
    #[inline]
    pub fn load(&self, addr: Cell) -> Result<Cell> {
        let index = self.resolve(addr)?;
        Ok(self.cells[index])
    }

    /// Write through an address held in a cell (result store)
    #[inline]
    pub fn store(&mut self, addr: Cell, value: Cell) -> Result<()> {
        let index = self.resolve(addr)?;
        self.cells[index] = value;
        Ok(())
    }

    fn fault(&self, address: i64) -> IntcodeError {
        IntcodeError::BadMemoryAccess {
            address,
            len: self.cells.len(),
        }
    }

    /// SHA-256 digest of the cell image
    ///
    /// Two programs have the same digest iff they hold the same cells.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.cells.len() as u64).to_le_bytes());
        for cell in &self.cells {
            hasher.update(cell.to_le_bytes());
        }
        hasher.finalize().into()
    }

    /// Hex rendering of [`Program::digest`]
    pub fn digest_hex(&self) -> String {
        self.digest().iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Serialize the memory image to bytes
    pub fn to_image(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a memory image
    pub fn from_image(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Save the memory image to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_image()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a memory image from a file
    pub fn load_image(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_image(&bytes)
    }
}

impl From<Vec<Cell>> for Program {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl FromIterator<Cell> for Program {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Comma-joined cells, the textual form the assembler reads back
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.cells.iter();
        if let Some(first) = cells.next() {
            write!(f, "{}", first)?;
            for cell in cells {
                write!(f, ",{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let program = Program::new(vec![1, 0, 0, 0, 99]);
        assert_eq!(program.to_string(), "1,0,0,0,99");
        assert_eq!(Program::default().to_string(), "");
        assert_eq!(Program::new(vec![-7]).to_string(), "-7");
    }

    #[test]
    fn test_from_instructions() {
        let instrs = vec![
            Instruction::add(0, 0, 0),
            Instruction::Halt,
            Instruction::mul(5, 6, 0),
            Instruction::Halt,
        ];
        let program = Program::from_instructions(&instrs);
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99, 2, 5, 6, 0, 99]);
        assert_eq!(program.len(), 10);
    }

    #[test]
    fn test_read_write_bounds() {
        let mut program = Program::new(vec![1, 2, 3]);
        assert_eq!(program.read(0).unwrap(), 1);
        assert_eq!(program.read(2).unwrap(), 3);
        assert!(program.read(3).is_err());

        program.write(1, 42).unwrap();
        assert_eq!(program.read(1).unwrap(), 42);

        let err = program.write(3, 0).unwrap_err();
        assert!(matches!(
            err,
            IntcodeError::BadMemoryAccess { address: 3, len: 3 }
        ));
        assert_eq!(program.cells(), &[1, 42, 3]);
    }

    #[test]
    fn test_load_store_negative_address() {
        let mut program = Program::new(vec![5, 6]);
        assert_eq!(program.load(1).unwrap(), 6);
        assert!(matches!(
            program.load(-1).unwrap_err(),
            IntcodeError::BadMemoryAccess { address: -1, len: 2 }
        ));
        assert!(program.store(-5, 0).is_err());
        assert!(program.store(2, 0).is_err());
        program.store(0, 9).unwrap();
        assert_eq!(program.cells(), &[9, 6]);
    }

    #[test]
    fn test_empty_program_rejects_everything() {
        let program = Program::default();
        assert!(program.is_empty());
        assert!(program.read(0).is_err());
        assert!(program.load(0).is_err());
    }

    #[test]
    fn test_digest() {
        let a = Program::new(vec![1, 0, 0, 0, 99]);
        let b = Program::new(vec![1, 0, 0, 0, 99]);
        let c = Program::new(vec![2, 0, 0, 0, 99]);
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
        assert_eq!(a.digest_hex().len(), 64);
    }

    #[test]
    fn test_image_roundtrip() {
        let program = Program::new(vec![30, 1, 1, 4, 2, 5, 6, 0, 99]);
        let bytes = program.to_image().unwrap();
        assert_eq!(Program::from_image(&bytes).unwrap(), program);
    }

    #[test]
    fn test_invalid_image() {
        let err = Program::from_image(&[0xFF]).unwrap_err();
        assert!(matches!(err, IntcodeError::InvalidImage(_)));
    }
}
