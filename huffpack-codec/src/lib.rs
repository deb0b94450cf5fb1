//! # huffpack-codec: Pure Rust Huffman Compression
//!
//! This crate provides static Huffman compression and decompression of byte
//! streams with a self-describing header.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Deterministic**: Equal frequencies are broken by symbol value, so the
//!   same input always produces the same stream
//! - **Self-describing**: The code tree is stored in the stream itself
//! - **Exact framing**: A sentinel symbol ends the body; nothing after it is read
//!
//! ## Stream Format
//!
//! All fields are packed MSB-first:
//!
//! - **Magic number** (32 bits): 1998 unless configured otherwise
//! - **Leaf count** (9 bits): distinct symbols in the tree, 1 to 257
//! - **Tree** (preorder): `0` for an internal node, `1` plus a 9-bit symbol
//!   for a leaf
//! - **Body**: the code of every input byte, then the code of symbol 256
//! - **Padding**: zero bits up to the next byte boundary
//!
//! ## Example
//!
//! ```rust
//! use huffpack_codec::{compress_bytes, decompress_bytes, CodecConfig};
//!
//! let config = CodecConfig::default();
//! let original = b"AAAAABBBCCD";
//!
//! let compressed = compress_bytes(original, &config).unwrap();
//! assert_eq!(compressed.len(), 15);
//!
//! let decompressed = decompress_bytes(&compressed, &config).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! Empty input has no alphabet to build a code from and is rejected:
//!
//! ```rust
//! use huffpack_codec::{compress_bytes, CodecConfig, HuffpackError};
//!
//! let err = compress_bytes(b"", &CodecConfig::default()).unwrap_err();
//! assert!(matches!(err, HuffpackError::EmptyAlphabet));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod body;
pub mod code_table;
mod config;
mod decoder;
mod encoder;
mod file;
pub mod frequency;
pub mod header;
pub mod heap;
mod symbol;
pub mod tree;

pub use code_table::{Code, CodeTable};
pub use config::{CodecConfig, LEAF_COUNT_BITS, MAGIC_BITS};
pub use decoder::{HeaderInfo, HuffmanDecoder};
pub use encoder::{CompressStats, EncodingReport, HuffmanEncoder};
pub use file::{compress, decompress, inspect};
pub use frequency::FrequencyTable;
pub use huffpack_core::error::{HuffpackError, Result};
pub use symbol::{SYMBOL_BITS, Symbol};
pub use tree::{HuffmanNode, HuffmanTree};

/// Compress `data` in memory.
///
/// # Example
///
/// ```rust
/// use huffpack_codec::{compress_bytes, CodecConfig};
///
/// let compressed = compress_bytes(&[b'X'; 1000], &CodecConfig::default()).unwrap();
/// assert!(compressed.len() < 200);
/// ```
pub fn compress_bytes(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    HuffmanEncoder::new(*config).encode(data, &mut output)?;
    Ok(output)
}

/// Decompress a complete stream held in memory.
pub fn decompress_bytes(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    HuffmanDecoder::new(*config).decode(data, &mut output)?;
    Ok(output)
}
