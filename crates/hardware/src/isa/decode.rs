//! Instruction Decoder.
//!
//! Turns a machine word into an [`Instruction`]. Decoding is total: any word
//! whose opcode field is not one of the eight opcodes decodes to
//! [`Instruction::Data`].

use super::instruction::{InstructionBits, encode};
use super::opcodes::Opcode;
use crate::common::Word;

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `dest = reg_a + reg_b`
    Add {
        /// First source register.
        reg_a: usize,
        /// Second source register.
        reg_b: usize,
        /// Destination register.
        dest: usize,
    },
    /// `dest = !(reg_a & reg_b)`
    Nand {
        /// First source register.
        reg_a: usize,
        /// Second source register.
        reg_b: usize,
        /// Destination register.
        dest: usize,
    },
    /// `reg_a = mem[reg_b + offset]`
    Lw {
        /// Destination register.
        reg_a: usize,
        /// Base register.
        reg_b: usize,
        /// Sign-extended word offset.
        offset: i32,
    },
    /// `mem[reg_b + offset] = reg_a`
    Sw {
        /// Source register.
        reg_a: usize,
        /// Base register.
        reg_b: usize,
        /// Sign-extended word offset.
        offset: i32,
    },
    /// `if reg_a == reg_b { pc = pc + 1 + offset }`
    Beq {
        /// First compared register.
        reg_a: usize,
        /// Second compared register.
        reg_b: usize,
        /// Sign-extended offset from the next instruction.
        offset: i32,
    },
    /// `reg_a = pc + 1; pc = reg_b`, skipped entirely when both name the same register.
    Jalr {
        /// Link register.
        reg_a: usize,
        /// Target register.
        reg_b: usize,
    },
    /// Stop the machine.
    Halt,
    /// Do nothing.
    Noop,
    /// A word with no valid opcode; executes as a no-op.
    Data(Word),
}

/// Decodes a machine word.
pub fn decode(word: Word) -> Instruction {
    let Some(opcode) = Opcode::from_field(word.opcode_field()) else {
        return Instruction::Data(word);
    };

    let reg_a = word.reg_a();
    let reg_b = word.reg_b();
    match opcode {
        Opcode::Add => Instruction::Add {
            reg_a,
            reg_b,
            dest: word.dest(),
        },
        Opcode::Nand => Instruction::Nand {
            reg_a,
            reg_b,
            dest: word.dest(),
        },
        Opcode::Lw => Instruction::Lw {
            reg_a,
            reg_b,
            offset: word.offset(),
        },
        Opcode::Sw => Instruction::Sw {
            reg_a,
            reg_b,
            offset: word.offset(),
        },
        Opcode::Beq => Instruction::Beq {
            reg_a,
            reg_b,
            offset: word.offset(),
        },
        Opcode::Jalr => Instruction::Jalr { reg_a, reg_b },
        Opcode::Halt => Instruction::Halt,
        Opcode::Noop => Instruction::Noop,
    }
}

impl Instruction {
    /// The opcode, or `None` for data words.
    pub const fn opcode(&self) -> Option<Opcode> {
        match self {
            Self::Add { .. } => Some(Opcode::Add),
            Self::Nand { .. } => Some(Opcode::Nand),
            Self::Lw { .. } => Some(Opcode::Lw),
            Self::Sw { .. } => Some(Opcode::Sw),
            Self::Beq { .. } => Some(Opcode::Beq),
            Self::Jalr { .. } => Some(Opcode::Jalr),
            Self::Halt => Some(Opcode::Halt),
            Self::Noop => Some(Opcode::Noop),
            Self::Data(_) => None,
        }
    }

    /// Encodes the instruction as a machine word.
    ///
    /// Unused fields are zero, so `decode(i.encode()) == i` for every
    /// instruction with in-range fields.
    pub const fn encode(&self) -> Word {
        let (opcode, reg_a, reg_b, imm) = match *self {
            Self::Add { reg_a, reg_b, dest } => (Opcode::Add, reg_a, reg_b, dest as i32),
            Self::Nand { reg_a, reg_b, dest } => (Opcode::Nand, reg_a, reg_b, dest as i32),
            Self::Lw {
                reg_a,
                reg_b,
                offset,
            } => (Opcode::Lw, reg_a, reg_b, offset),
            Self::Sw {
                reg_a,
                reg_b,
                offset,
            } => (Opcode::Sw, reg_a, reg_b, offset),
            Self::Beq {
                reg_a,
                reg_b,
                offset,
            } => (Opcode::Beq, reg_a, reg_b, offset),
            Self::Jalr { reg_a, reg_b } => (Opcode::Jalr, reg_a, reg_b, 0),
            Self::Halt => (Opcode::Halt, 0, 0, 0),
            Self::Noop => (Opcode::Noop, 0, 0, 0),
            Self::Data(word) => return word,
        };
        encode(opcode.field(), reg_a, reg_b, imm)
    }
}
