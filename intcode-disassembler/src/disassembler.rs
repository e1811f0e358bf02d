//! Main disassembler logic
//!
//! A static walk decodes from address 0 and advances by each instruction's
//! width, the same stride the runtime uses when nothing rewrites the code.

use intcode_spec::{Instruction, Program};
use crate::error::Result;
use crate::decoder::decode;
use crate::formatter::format;

/// Statically decode every instruction, paired with its address
pub fn instructions(program: &Program) -> Result<Vec<(usize, Instruction)>> {
    let mut out = Vec::new();
    let mut addr = 0;

    while addr < program.len() {
        let (instr, width) = decode(program, addr)?;
        out.push((addr, instr));
        addr += width;
    }

    Ok(out)
}

/// Render a program as comma-joined instruction renderings
///
/// For any program the assembler produced this equals the program's own
/// `Display` output.
pub fn render(program: &Program) -> Result<String> {
    let rendered: Vec<String> = instructions(program)?
        .iter()
        .map(|(_, instr)| instr.to_string())
        .collect();
    Ok(rendered.join(","))
}

/// Disassemble a program into an annotated listing
///
/// Infallible: a trailing group that cannot be decoded is reported inline
/// and ends the listing. Use [`instructions`] to get the fault as an error.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();
    let mut body = String::new();
    let mut count = 0;
    let mut addr = 0;

    while addr < program.len() {
        body.push_str(&format!("{:04}:  ", addr));

        match decode(program, addr) {
            Ok((instr, width)) => {
                body.push_str(&format!("{:<24}", instr.to_string()));
                body.push_str(&format(&instr));
                body.push('\n');
                count += 1;
                addr += width;
            }
            Err(e) => {
                body.push_str(&format!("; ERROR: {}\n", e));
                break;
            }
        }
    }

    output.push_str("; Intcode Disassembly\n");
    output.push_str(&format!(
        "; Program size: {} cells ({} instructions)\n",
        program.len(),
        count
    ));
    output.push('\n');
    output.push_str(&body);

    output
}
