//! Stream body: the concatenated codes of every input byte, then the
//! sentinel's code.

use crate::code_table::CodeTable;
use crate::symbol::Symbol;
use crate::tree::{HuffmanNode, HuffmanTree};
use huffpack_core::bitstream::{BitReader, BitWriter};
use huffpack_core::error::{HuffpackError, Result};
use log::debug;
use std::io::{Read, Write};

/// Encode `data` followed by the sentinel. Returns the number of bits written.
pub fn encode_body<W: Write>(
    writer: &mut BitWriter<W>,
    codes: &CodeTable,
    data: &[u8],
) -> Result<u64> {
    let start = writer.bits_written();

    // Resolve all byte codes once instead of per input byte.
    let mut byte_codes = Vec::with_capacity(256);
    for byte in 0..=255u8 {
        byte_codes.push(codes.get(Symbol::from_byte(byte)));
    }

    for &byte in data {
        let code = byte_codes[byte as usize]
            .ok_or_else(|| HuffpackError::invalid_symbol(byte as u32))?;
        code.write_to(writer)?;
    }
    codes.require(Symbol::EOF)?.write_to(writer)?;

    let bits = writer.bits_written() - start;
    debug!("encoded body: {} bytes -> {} bits", data.len(), bits);
    Ok(bits)
}

/// Decode symbols by walking `tree` one bit at a time until the sentinel.
///
/// Returns the number of bytes written. Reads exactly the bits of the body
/// and nothing after the sentinel's last bit.
pub fn decode_body<R: Read, W: Write>(
    reader: &mut BitReader<R>,
    tree: &HuffmanTree,
    output: &mut W,
) -> Result<u64> {
    let root = tree.root();

    // A lone leaf has the empty code and would never consume input.
    if let HuffmanNode::Leaf { symbol, .. } = root {
        return if symbol.is_eof() {
            Ok(0)
        } else {
            Err(HuffpackError::malformed_tree(format!(
                "single leaf {} without end-of-stream marker",
                symbol
            )))
        };
    }

    let start = reader.bits_read();
    let mut written = 0u64;
    let mut cursor = root;

    // The root is internal here, so resetting to it always reads a bit next.
    loop {
        cursor = match cursor {
            HuffmanNode::Internal { left, right, .. } => {
                if reader.read_bit()? {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            HuffmanNode::Leaf { symbol, .. } => match symbol.as_byte() {
                None => break,
                Some(byte) => {
                    output.write_all(&[byte])?;
                    written += 1;
                    root
                }
            },
        };
    }

    debug!(
        "decoded body: {} bits -> {} bytes",
        reader.bits_read() - start,
        written
    );
    Ok(written)
}
