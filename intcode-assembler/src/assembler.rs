//! Main assembler logic

use intcode_spec::{Program, DEFAULT_SEPARATOR};
use crate::error::{AssemblerError, Result};
use crate::parser::parse_instruction;

/// Split source into tokens on `separator`
pub fn tokenize<'a>(source: &'a str, separator: &str) -> Result<Vec<&'a str>> {
    if separator.is_empty() {
        return Err(AssemblerError::EmptySeparator);
    }
    Ok(source.split(separator).collect())
}

/// Assemble separator-delimited source into a program
pub fn assemble(source: &str, separator: &str) -> Result<Program> {
    let tokens = tokenize(source, separator)?;
    let mut program = Program::default();

    let mut index = 0;
    while index < tokens.len() {
        let (instr, width) = parse_instruction(&tokens, index)?;
        program.push_instruction(&instr);
        index += width;
    }

    Ok(program)
}

/// Assemble comma-separated source
pub fn assemble_default(source: &str) -> Result<Program> {
    assemble(source, DEFAULT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_simple() {
        let program = assemble("1,0,0,0,99", ",").unwrap();
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99]);
    }

    #[test]
    fn test_assemble_trailing_newline() {
        let program = assemble_default("1,1,1,4,99,5,6,0,99\n").unwrap();
        assert_eq!(program.len(), 9);
        assert_eq!(program.to_string(), "1,1,1,4,99,5,6,0,99");
    }

    #[test]
    fn test_data_after_halt_must_form_groups() {
        // 30,40,50 after the halt is read as a 4-wide group and comes up short
        let result = assemble_default("1,9,10,3,2,3,11,0,99,30,40,50");
        assert!(matches!(
            result,
            Err(AssemblerError::MalformedInstruction { index: 9, .. })
        ));
    }

    #[test]
    fn test_assemble_custom_separator() {
        let program = assemble("1;0;0;0;99", ";").unwrap();
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99]);

        let program = assemble("1 :: 0 :: 0 :: 0 :: 99", "::").unwrap();
        assert_eq!(program.cells(), &[1, 0, 0, 0, 99]);
    }

    #[test]
    fn test_empty_separator() {
        assert!(matches!(
            assemble("1,0,0,0,99", ""),
            Err(AssemblerError::EmptySeparator)
        ));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("1,2,,3", ",").unwrap(), vec!["1", "2", "", "3"]);
    }
}
