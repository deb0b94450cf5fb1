//! Symbol-to-code mapping derived from a Huffman tree.

use crate::symbol::Symbol;
use crate::tree::{HuffmanNode, HuffmanTree};
use huffpack_core::bitstream::BitWriter;
use huffpack_core::error::{HuffpackError, Result};
use std::fmt;
use std::io::Write;

/// The bit sequence for one symbol: its path from the root, 0 = left, 1 = right.
///
/// Codes can be longer than any machine word (up to 256 bits for a
/// degenerate tree), so the bits are stored individually.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create a code from its bits, first bit first.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// The bits, first bit first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code has no bits (only for a single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Append the bits to a bit stream.
    #[inline]
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        for &bit in &self.bits {
            writer.write_bit(bit)?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Codes for every symbol present in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Assign each leaf of `tree` its root path.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; Symbol::COUNT];
        let mut path = Vec::new();
        assign(tree.root(), &mut path, &mut codes);
        Self { codes }
    }

    /// The code for `symbol`, if the symbol is in the tree.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes[symbol.index()].as_ref()
    }

    /// The code for `symbol`, or an error if the tree does not contain it.
    #[inline]
    pub fn require(&self, symbol: Symbol) -> Result<&Code> {
        self.get(symbol)
            .ok_or_else(|| HuffpackError::invalid_symbol(symbol.value() as u32))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        Symbol::all().filter_map(move |s| self.codes[s.index()].as_ref().map(|c| (s, c)))
    }
}

/// Depth-first, left before right.
fn assign(node: &HuffmanNode, path: &mut Vec<bool>, codes: &mut [Option<Code>]) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes[symbol.index()] = Some(Code::from_bits(path.clone()));
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();

            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn table_for(data: &[u8]) -> CodeTable {
        let freq = FrequencyTable::scan(data).unwrap();
        CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap())
    }

    fn code_str(table: &CodeTable, symbol: Symbol) -> String {
        table.get(symbol).unwrap().to_string()
    }

    #[test]
    fn test_example_codes() {
        let table = table_for(b"AAAAABBBCCD");
        assert_eq!(table.len(), 5);
        assert_eq!(code_str(&table, Symbol::from(b'A')), "0");
        assert_eq!(code_str(&table, Symbol::from(b'B')), "10");
        assert_eq!(code_str(&table, Symbol::from(b'C')), "110");
        assert_eq!(code_str(&table, Symbol::from(b'D')), "1110");
        assert_eq!(code_str(&table, Symbol::EOF), "1111");
        assert!(table.get(Symbol::from(b'E')).is_none());
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"Peter Piper picked a peck of pickled peppers\n\t\x00\xff");
        let entries: Vec<_> = table.iter().collect();
        for (i, (sa, a)) in entries.iter().enumerate() {
            for (sb, b) in entries.iter().skip(i + 1) {
                assert!(
                    !a.is_prefix_of(b) && !b.is_prefix_of(a),
                    "{} ({}) and {} ({}) collide",
                    sa,
                    a,
                    sb,
                    b
                );
            }
        }
    }

    #[test]
    fn test_single_leaf_gets_empty_code() {
        let tree = HuffmanTree::from_root(HuffmanNode::leaf(Symbol::EOF, 1));
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.len(), 1);
        assert!(table.get(Symbol::EOF).unwrap().is_empty());
    }

    #[test]
    fn test_require_missing_symbol() {
        let table = table_for(b"abc");
        assert!(table.require(Symbol::from(b'a')).is_ok());
        assert!(matches!(
            table.require(Symbol::from(b'z')),
            Err(HuffpackError::InvalidSymbol { symbol: 122 })
        ));
    }

    #[test]
    fn test_code_write_to() {
        let code = Code::from_bits(vec![true, false, true, true]);
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        code.write_to(&mut writer).unwrap();
        assert_eq!(writer.bits_written(), 4);
        writer.finish().unwrap();
        assert_eq!(out, vec![0b1011_0000]);
    }

    #[test]
    fn test_kraft_equality() {
        // A full binary tree's codes satisfy sum(2^-len) == 1.
        let data: Vec<u8> = (0..=255u8)
            .flat_map(|b| std::iter::repeat_n(b, b as usize % 7 + 1))
            .collect();
        let table = table_for(&data);
        let max = table.iter().map(|(_, c)| c.len()).max().unwrap();
        let total: u128 = table.iter().map(|(_, c)| 1u128 << (max - c.len())).sum();
        assert_eq!(total, 1u128 << max);
    }
}
