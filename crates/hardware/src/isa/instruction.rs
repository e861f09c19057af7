//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the fields of a 32-bit instruction word and the
//! inverse encoder used by assemblers and tests.

use crate::common::Word;

/// Bit shift of the opcode field.
pub const OPCODE_SHIFT: u32 = 22;
/// Bit shift of the regA field (bits 19-21).
pub const REG_A_SHIFT: u32 = 19;
/// Bit shift of the regB field (bits 16-18).
pub const REG_B_SHIFT: u32 = 16;
/// Bit mask for a register field.
pub const REG_MASK: i32 = 0x7;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: i32 = 0xFFFF;
/// Sign bit of the immediate field.
const IMM_SIGN_BIT: i32 = 1 << 15;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Opcode field: the word shifted right by 22, sign preserved.
    ///
    /// Negative words and words with bits above 24 set never match an opcode.
    fn opcode_field(&self) -> i32;

    /// First register operand (bits 19-21).
    fn reg_a(&self) -> usize;

    /// Second register operand (bits 16-18).
    fn reg_b(&self) -> usize;

    /// Raw 16-bit immediate field (bits 0-15).
    fn imm_field(&self) -> i32;

    /// Immediate field sign-extended from 16 bits.
    fn offset(&self) -> i32;

    /// Destination register of add/nand: the low three bits of the immediate field.
    fn dest(&self) -> usize;
}

impl InstructionBits for Word {
    #[inline(always)]
    fn opcode_field(&self) -> i32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm_field(&self) -> i32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn offset(&self) -> i32 {
        sign_extend_16(self.imm_field())
    }

    #[inline(always)]
    fn dest(&self) -> usize {
        (self & REG_MASK) as usize
    }
}

/// Converts a 16-bit two's complement field into a word.
pub const fn sign_extend_16(field: i32) -> i32 {
    if field & IMM_SIGN_BIT != 0 {
        field - (1 << 16)
    } else {
        field
    }
}

/// Packs an instruction word from its fields.
///
/// Register indices are masked to three bits and the immediate to sixteen.
pub const fn encode(opcode: i32, reg_a: usize, reg_b: usize, imm: i32) -> Word {
    (opcode << OPCODE_SHIFT)
        | ((reg_a as i32 & REG_MASK) << REG_A_SHIFT)
        | ((reg_b as i32 & REG_MASK) << REG_B_SHIFT)
        | (imm & IMM_MASK)
}
