//! # huffpack Core
//!
//! Core components shared by the huffpack crates:
//!
//! - [`bitstream`]: MSB-first bit-level I/O used by the stream header and body
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI (huffpack-cli)                                      │
//! │     compress / decompress / info, reporting, logging    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec (huffpack-codec)                                  │
//! │     frequencies, min-heap, tree, codes, header, body    │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     BitReader/BitWriter, HuffpackError                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffpack_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut data = Vec::new();
//! let mut writer = BitWriter::new(&mut data);
//! writer.write_bits(0xABC, 12).unwrap();
//! writer.finish().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(data));
//! assert_eq!(reader.read_bits(12).unwrap(), 0xABC);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HuffpackError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{HuffpackError, Result};
}
