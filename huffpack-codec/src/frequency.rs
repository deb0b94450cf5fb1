//! Symbol frequency counting.

use crate::symbol::Symbol;
use huffpack_core::error::{HuffpackError, Result};

/// Occurrence counts for all 257 symbols, gathered in a single pass.
///
/// The sentinel always has a count of exactly 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; Symbol::COUNT],
}

impl FrequencyTable {
    /// Count every byte of `data` and add the sentinel.
    ///
    /// Fails with [`HuffpackError::EmptyAlphabet`] when `data` is empty.
    pub fn scan(data: &[u8]) -> Result<Self> {
        let mut counts = [0u64; Symbol::COUNT];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        if counts[..256].iter().all(|&c| c == 0) {
            return Err(HuffpackError::EmptyAlphabet);
        }

        counts[Symbol::EOF.index()] = 1;
        Ok(Self { counts })
    }

    /// Occurrence count of a symbol.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Number of symbols with a non-zero count (sentinel included).
    pub fn leaf_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of input bytes counted (sentinel excluded).
    pub fn total_bytes(&self) -> u64 {
        self.counts[..256].iter().sum()
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        Symbol::all()
            .map(move |s| (s, self.counts[s.index()]))
            .filter(|&(_, count)| count > 0)
    }
}
