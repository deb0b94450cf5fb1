//! Stream header: magic number, leaf count and the preorder-encoded tree.
//!
//! ```text
//! magic        32 bits
//! leaf count    9 bits
//! tree         per node: 0            internal, then left and right subtrees
//!                        1 + 9 bits   leaf and its symbol
//! ```

use crate::config::{CodecConfig, LEAF_COUNT_BITS, MAGIC_BITS};
use crate::symbol::{SYMBOL_BITS, Symbol};
use crate::tree::{HuffmanNode, HuffmanTree};
use huffpack_core::bitstream::{BitReader, BitWriter};
use huffpack_core::error::{HuffpackError, Result};
use log::{debug, trace};
use std::io::{Read, Write};

/// Write the header for `tree`. Returns the number of bits written.
pub fn write_header<W: Write>(
    writer: &mut BitWriter<W>,
    config: &CodecConfig,
    tree: &HuffmanTree,
) -> Result<u64> {
    let start = writer.bits_written();
    let leaf_count = tree.leaf_count();

    writer.write_bits(config.magic, MAGIC_BITS)?;
    writer.write_bits(leaf_count as u32, LEAF_COUNT_BITS)?;
    write_node(writer, tree.root())?;

    let bits = writer.bits_written() - start;
    debug!("wrote header: {} leaves, {} bits", leaf_count, bits);
    Ok(bits)
}

fn write_node<W: Write>(writer: &mut BitWriter<W>, node: &HuffmanNode) -> Result<()> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write_bits(symbol.value() as u32, SYMBOL_BITS)
        }
        HuffmanNode::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_node(writer, left)?;
            write_node(writer, right)
        }
    }
}

/// Check the magic number and read the declared leaf count.
///
/// Nothing past the magic number is consumed when it does not match.
pub fn read_preamble<R: Read>(reader: &mut BitReader<R>, config: &CodecConfig) -> Result<usize> {
    let found = reader.read_bits(MAGIC_BITS)?;
    if found != config.magic {
        return Err(HuffpackError::format_mismatch(config.magic, found));
    }

    let leaf_count = reader.read_bits(LEAF_COUNT_BITS)? as usize;
    if leaf_count == 0 || leaf_count > Symbol::COUNT {
        return Err(HuffpackError::malformed_tree(format!(
            "leaf count {} outside 1..={}",
            leaf_count,
            Symbol::COUNT
        )));
    }
    Ok(leaf_count)
}

/// Read a header written by [`write_header`] and rebuild the tree.
pub fn read_header<R: Read>(reader: &mut BitReader<R>, config: &CodecConfig) -> Result<HuffmanTree> {
    let leaf_count = read_preamble(reader, config)?;
    let mut state = TreeReader::new(leaf_count);
    let root = state.read_node(reader)?;

    debug!(
        "read header: {} leaves, {} bits",
        leaf_count,
        reader.bits_read()
    );
    Ok(HuffmanTree::from_root(root))
}

/// Progress of a preorder tree read.
///
/// Tracks how many leaves and internal nodes were seen so that reading stops
/// exactly when the declared number of leaves is complete.
#[derive(Debug)]
struct TreeReader {
    leaf_count: usize,
    leaves_seen: usize,
    internals_seen: usize,
    seen: [bool; Symbol::COUNT],
}

impl TreeReader {
    fn new(leaf_count: usize) -> Self {
        Self {
            leaf_count,
            leaves_seen: 0,
            internals_seen: 0,
            seen: [false; Symbol::COUNT],
        }
    }

    fn read_node<R: Read>(&mut self, reader: &mut BitReader<R>) -> Result<HuffmanNode> {
        // All declared leaves are in: no more structure may be read.
        if self.leaves_seen == self.leaf_count {
            return Err(HuffpackError::malformed_tree(format!(
                "node expected after all {} leaves were read",
                self.leaf_count
            )));
        }

        if reader.read_bit()? {
            let value = reader.read_bits(SYMBOL_BITS)?;
            let symbol = Symbol::new(value as u16)?;
            if std::mem::replace(&mut self.seen[symbol.index()], true) {
                return Err(HuffpackError::malformed_tree(format!(
                    "symbol {} appears twice",
                    symbol
                )));
            }
            self.leaves_seen += 1;
            trace!("leaf {} ({}/{})", symbol, self.leaves_seen, self.leaf_count);
            Ok(HuffmanNode::leaf(symbol, 0))
        } else {
            // A full binary tree with n leaves has n - 1 internal nodes.
            self.internals_seen += 1;
            if self.internals_seen >= self.leaf_count {
                return Err(HuffpackError::malformed_tree(format!(
                    "more than {} internal nodes for {} leaves",
                    self.leaf_count - 1,
                    self.leaf_count
                )));
            }
            let left = self.read_node(reader)?;
            let right = self.read_node(reader)?;
            Ok(HuffmanNode::Internal {
                frequency: 0,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}
