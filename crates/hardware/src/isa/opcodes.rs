//! Opcodes.
//!
//! Values of the opcode field (`word >> 22`).

/// `add regA regB dest`: `dest = regA + regB`.
pub const ADD: i32 = 0;

/// `nand regA regB dest`: `dest = !(regA & regB)`.
pub const NAND: i32 = 1;

/// `lw regA regB offset`: `regA = mem[regB + offset]`.
pub const LW: i32 = 2;

/// `sw regA regB offset`: `mem[regB + offset] = regA`.
pub const SW: i32 = 3;

/// `beq regA regB offset`: branch to `pc + 1 + offset` if `regA == regB`.
pub const BEQ: i32 = 4;

/// `jalr regA regB`: `regA = pc + 1; pc = regB`.
pub const JALR: i32 = 5;

/// `halt`: stop the machine.
pub const HALT: i32 = 6;

/// `noop`: do nothing.
pub const NOOP: i32 = 7;

/// Encoded `noop` instruction word.
pub const NOOP_INSTRUCTION: i32 = NOOP << 22;

/// Encoded `halt` instruction word.
pub const HALT_INSTRUCTION: i32 = HALT << 22;

/// The eight operations of the instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Two-register add.
    Add,
    /// Two-register bitwise NAND.
    Nand,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Jump and link through a register.
    Jalr,
    /// Halt.
    Halt,
    /// No operation.
    Noop,
}

impl Opcode {
    /// Maps an opcode field value to an opcode, or `None` for data words.
    pub const fn from_field(field: i32) -> Option<Self> {
        match field {
            ADD => Some(Self::Add),
            NAND => Some(Self::Nand),
            LW => Some(Self::Lw),
            SW => Some(Self::Sw),
            BEQ => Some(Self::Beq),
            JALR => Some(Self::Jalr),
            HALT => Some(Self::Halt),
            NOOP => Some(Self::Noop),
            _ => None,
        }
    }

    /// The opcode field value.
    pub const fn field(self) -> i32 {
        match self {
            Self::Add => ADD,
            Self::Nand => NAND,
            Self::Lw => LW,
            Self::Sw => SW,
            Self::Beq => BEQ,
            Self::Jalr => JALR,
            Self::Halt => HALT,
            Self::Noop => NOOP,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Nand => "nand",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Jalr => "jalr",
            Self::Halt => "halt",
            Self::Noop => "noop",
        }
    }
}
