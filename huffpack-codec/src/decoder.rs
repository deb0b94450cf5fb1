//! Huffman decoder (decompression).

use crate::body::decode_body;
use crate::code_table::CodeTable;
use crate::config::CodecConfig;
use crate::header::read_header;
use crate::tree::HuffmanTree;
use huffpack_core::bitstream::BitReader;
use huffpack_core::error::Result;
use std::io::{Read, Write};

/// Summary of a stream header, read without touching the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// The magic number found (always equal to the configured one).
    pub magic: u32,
    /// Number of leaves declared and read.
    pub leaf_count: usize,
    /// Size of the header in bits.
    pub header_bits: u64,
    /// Length of the longest code.
    pub max_code_len: usize,
    /// Codes recovered from the stored tree.
    pub codes: CodeTable,
}

/// Huffman decoder for decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecoder {
    config: CodecConfig,
}

impl HuffmanDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Read the header from `reader` and rebuild the tree.
    pub(crate) fn read_tree<R: Read>(&self, reader: &mut BitReader<R>) -> Result<HuffmanTree> {
        read_header(reader, &self.config)
    }

    /// Read and validate the header only.
    pub fn read_header<R: Read>(&self, input: R) -> Result<HeaderInfo> {
        let mut reader = BitReader::new(input);
        let tree = self.read_tree(&mut reader)?;

        Ok(HeaderInfo {
            magic: self.config.magic,
            leaf_count: tree.leaf_count(),
            header_bits: reader.bits_read(),
            max_code_len: tree.depth(),
            codes: CodeTable::from_tree(&tree),
        })
    }

    /// Decompress a whole stream from `input` into `output`.
    ///
    /// Returns the number of bytes written. Input after the sentinel's code
    /// is left unread.
    pub fn decode<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<u64> {
        let mut reader = BitReader::new(input);
        let tree = self.read_tree(&mut reader)?;
        let written = decode_body(&mut reader, &tree, &mut output)?;
        output.flush()?;
        Ok(written)
    }
}
