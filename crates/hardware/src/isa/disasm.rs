//! Instruction Disassembler.
//!
//! Renders instructions in assembler syntax for trace and state output:
//!
//! ```
//! use cachesim_core::isa::decode;
//!
//! assert_eq!(decode(0x0001_0003).to_string(), "add 0 1 3");
//! assert_eq!(decode(0x0089_FFFF).to_string(), "lw 1 1 -1");
//! assert_eq!(decode(25_165_824).to_string(), "halt");
//! assert_eq!(decode(42).to_string(), "add 0 0 2");
//! assert_eq!(decode(-1).to_string(), "data -1");
//! ```

use std::fmt;

use super::decode::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(opcode) = self.opcode() else {
            return write!(f, "data {}", self.encode());
        };
        f.write_str(opcode.mnemonic())?;

        match *self {
            Self::Add { reg_a, reg_b, dest } | Self::Nand { reg_a, reg_b, dest } => {
                write!(f, " {reg_a} {reg_b} {dest}")
            }
            Self::Lw {
                reg_a,
                reg_b,
                offset,
            }
            | Self::Sw {
                reg_a,
                reg_b,
                offset,
            }
            | Self::Beq {
                reg_a,
                reg_b,
                offset,
            } => write!(f, " {reg_a} {reg_b} {offset}"),
            Self::Jalr { reg_a, reg_b } => write!(f, " {reg_a} {reg_b}"),
            Self::Halt | Self::Noop | Self::Data(_) => Ok(()),
        }
    }
}
