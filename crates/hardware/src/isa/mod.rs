//! Instruction Set Architecture (ISA) Definitions.
//!
//! The machine has eight registers, word-addressed memory, and eight
//! instructions in a single 32-bit format:
//!
//! ```text
//!  31      25 24    22 21  19 18  16 15               0
//! | unused   | opcode | regA | regB | immediate/dest   |
//! ```
//!
//! Words whose opcode field names no instruction are data and execute as no-ops.

/// Instruction decoding from machine words.
pub mod decode;

/// Instruction disassembler for trace and state output.
pub mod disasm;

/// Instruction field extraction and encoding utilities.
pub mod instruction;

/// Opcode values.
pub mod opcodes;

pub use decode::{Instruction, decode};
pub use opcodes::Opcode;
