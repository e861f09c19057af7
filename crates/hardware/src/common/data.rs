//! Memory Access Types.
//!
//! This module defines the word type and the classification of memory accesses
//! issued to the memory hierarchy. These types are used for:
//! 1. **Request Encoding:** A write always carries its value, a read never does.
//! 2. **Statistics Tracking:** Counting reads and writes separately.
//! 3. **Trace Output:** Selecting the processor-side transfer direction.

/// A machine word. Registers and memory cells are signed 32-bit values.
pub type Word = i32;

/// Kind of memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Data moves from memory to the processor (instruction fetch or load).
    Read,
    /// Data moves from the processor to memory (store).
    Write,
}

/// A memory request as issued by the execution engine.
///
/// The value to store travels with the write, so a write without a value
/// (or a read with one) cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// Read the word at the address.
    Read,
    /// Store the given word at the address.
    Write(Word),
}

impl MemOp {
    /// Returns the access kind of this request.
    pub const fn access_type(self) -> AccessType {
        match self {
            Self::Read => AccessType::Read,
            Self::Write(_) => AccessType::Write,
        }
    }
}
