//! The 257-symbol alphabet: 256 byte values plus the end-of-stream sentinel.

use huffpack_core::error::{HuffpackError, Result};
use std::fmt;

/// Width in bits of a serialized symbol (enough for 0..=256).
pub const SYMBOL_BITS: u8 = 9;

/// One symbol of the alphabet.
///
/// Values 0–255 are raw bytes, 256 is the end-of-stream sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u16);

impl Symbol {
    /// The end-of-stream sentinel (pseudo-EOF).
    pub const EOF: Symbol = Symbol(256);

    /// Number of distinct symbols.
    pub const COUNT: usize = 257;

    /// Create a symbol from a raw value, rejecting anything above 256.
    pub fn new(value: u16) -> Result<Self> {
        if (value as usize) < Self::COUNT {
            Ok(Symbol(value))
        } else {
            Err(HuffpackError::invalid_symbol(value as u32))
        }
    }

    /// The symbol for a byte value.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Symbol(byte as u16)
    }

    /// Raw symbol value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position of this symbol in 257-entry tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the end-of-stream sentinel.
    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == 256
    }

    /// The byte this symbol stands for, or `None` for the sentinel.
    #[inline]
    pub fn as_byte(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }

    /// Iterate over every symbol in ascending order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..Self::COUNT as u16).map(Symbol)
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::from_byte(byte)
    }
}

impl fmt::Display for Symbol {
    /// Printable ASCII shows as a quoted character, everything else as a
    /// number, and the sentinel as `EOF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_byte() {
            None => write!(f, "EOF"),
            Some(b) if b.is_ascii_graphic() || b == b' ' => write!(f, "'{}'", b as char),
            Some(b) => write!(f, "0x{:02X}", b),
        }
    }
}
