//! Huffman encoder (compression).

use crate::body::encode_body;
use crate::code_table::{Code, CodeTable};
use crate::config::CodecConfig;
use crate::frequency::FrequencyTable;
use crate::header::write_header;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;
use huffpack_core::bitstream::BitWriter;
use huffpack_core::error::Result;
use log::{debug, trace};
use std::io::Write;

/// Sizes produced by one compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    /// Input size in bits.
    pub original_bits: u64,
    /// Magic number, leaf count and tree.
    pub header_bits: u64,
    /// All codes including the sentinel.
    pub body_bits: u64,
    /// Header plus body, final padding excluded.
    pub compressed_bits: u64,
    /// Distinct symbols in the tree, sentinel included.
    pub leaf_count: usize,
}

impl CompressStats {
    /// Size of the compressed stream in whole bytes.
    pub fn compressed_bytes(&self) -> u64 {
        self.compressed_bits.div_ceil(8)
    }

    /// Space saved relative to the input, in percent.
    ///
    /// Negative when the output is larger than the input.
    pub fn space_savings(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.compressed_bits as f64 / self.original_bits as f64)
    }
}

/// One row of the encoding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingReport {
    /// The symbol.
    pub symbol: Symbol,
    /// How often it occurs (1 for the sentinel).
    pub frequency: u64,
    /// Its code.
    pub code: Code,
}

/// Everything derived from the input before any bit is written.
#[derive(Debug)]
pub(crate) struct EncodingPlan {
    pub(crate) frequencies: FrequencyTable,
    pub(crate) tree: HuffmanTree,
    pub(crate) codes: CodeTable,
}

/// Huffman encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    config: CodecConfig,
}

impl HuffmanEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Scan `data` and derive its tree and codes.
    pub(crate) fn plan(&self, data: &[u8]) -> Result<EncodingPlan> {
        let frequencies = FrequencyTable::scan(data)?;
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);

        for (symbol, code) in codes.iter() {
            trace!("code {} = {}", symbol, code);
        }

        Ok(EncodingPlan {
            frequencies,
            tree,
            codes,
        })
    }

    /// Write the stream for a prepared plan.
    pub(crate) fn write_plan<W: Write>(
        &self,
        plan: &EncodingPlan,
        data: &[u8],
        output: W,
    ) -> Result<CompressStats> {
        let mut writer = BitWriter::new(output);
        let header_bits = write_header(&mut writer, &self.config, &plan.tree)?;
        let body_bits = encode_body(&mut writer, &plan.codes, data)?;
        writer.finish()?;

        let stats = CompressStats {
            original_bits: data.len() as u64 * 8,
            header_bits,
            body_bits,
            compressed_bits: header_bits + body_bits,
            leaf_count: plan.tree.leaf_count(),
        };
        debug!(
            "compressed {} bits -> {} bits ({:.2}% saved)",
            stats.original_bits,
            stats.compressed_bits,
            stats.space_savings()
        );
        Ok(stats)
    }

    /// Compress `data` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Count every byte value and add the sentinel
    /// 2. Merge the two rarest nodes until one tree is left
    /// 3. Assign each leaf its root path as code
    /// 4. Write the header: magic number, leaf count, preorder tree
    /// 5. Write the code of every input byte, then the sentinel's
    /// 6. Pad the last byte with zeros
    ///
    /// Fails with `EmptyAlphabet` before writing anything when `data` is
    /// empty.
    pub fn encode<W: Write>(&self, data: &[u8], output: W) -> Result<CompressStats> {
        let plan = self.plan(data)?;
        self.write_plan(&plan, data, output)
    }

    /// The encoding table for `data`, in ascending symbol order.
    pub fn report(&self, data: &[u8]) -> Result<Vec<EncodingReport>> {
        let plan = self.plan(data)?;
        Ok(plan
            .codes
            .iter()
            .map(|(symbol, code)| EncodingReport {
                symbol,
                frequency: plan.frequencies.get(symbol),
                code: code.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffpack_core::error::HuffpackError;

    #[test]
    fn test_encode_example_stats() {
        let encoder = HuffmanEncoder::default();
        let mut out = Vec::new();
        let stats = encoder.encode(b"AAAAABBBCCD", &mut out).unwrap();

        assert_eq!(stats.original_bits, 88);
        assert_eq!(stats.header_bits, 95);
        assert_eq!(stats.body_bits, 25);
        assert_eq!(stats.compressed_bits, 120);
        assert_eq!(stats.leaf_count, 5);
        assert_eq!(stats.compressed_bytes(), 15);
        assert_eq!(out.len(), 15);
    }

    #[test]
    fn test_encode_empty_writes_nothing() {
        let mut out = Vec::new();
        let err = HuffmanEncoder::default().encode(b"", &mut out).unwrap_err();
        assert!(matches!(err, HuffpackError::EmptyAlphabet));
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_magic_written() {
        let encoder = HuffmanEncoder::new(CodecConfig::with_magic(0xCAFE_BABE));
        let mut out = Vec::new();
        encoder.encode(b"hi", &mut out).unwrap();
        assert_eq!(&out[..4], &[0xCA, 0xFE, 0xBA, 0xBE]);
    }

    #[test]
    fn test_space_savings() {
        let stats = CompressStats {
            original_bits: 800,
            header_bits: 100,
            body_bits: 100,
            compressed_bits: 200,
            leaf_count: 3,
        };
        assert!((stats.space_savings() - 75.0).abs() < 1e-9);

        let grown = CompressStats {
            original_bits: 8,
            compressed_bits: 62,
            ..stats
        };
        assert!(grown.space_savings() < 0.0);
        assert_eq!(grown.compressed_bytes(), 8);
    }

    #[test]
    fn test_report_rows() {
        let rows = HuffmanEncoder::default().report(b"AAAAABBBCCD").unwrap();
        let summary: Vec<(String, u64, String)> = rows
            .iter()
            .map(|r| (r.symbol.to_string(), r.frequency, r.code.to_string()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("'A'".to_string(), 5, "0".to_string()),
                ("'B'".to_string(), 3, "10".to_string()),
                ("'C'".to_string(), 2, "110".to_string()),
                ("'D'".to_string(), 1, "1110".to_string()),
                ("EOF".to_string(), 1, "1111".to_string()),
            ]
        );
    }
}
