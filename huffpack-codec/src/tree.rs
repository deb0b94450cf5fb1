//! Huffman tree construction.
//!
//! Leaves are merged bottom-up through a [`MinHeap`] until a single root is
//! left.
//!
//! # Tie-break
//!
//! Heap entries compare by `(frequency, order)`. A leaf's order is its symbol
//! value (0–256); each merged node takes the next value of a counter that
//! starts at 257. Among equal frequencies, lower symbols therefore come out
//! first and leaves come out before merged nodes, so the tree is fully
//! determined by the input.

use crate::frequency::FrequencyTable;
use crate::heap::MinHeap;
use crate::symbol::Symbol;
use huffpack_core::error::{HuffpackError, Result};
use log::debug;
use std::cmp::Ordering;

/// A node of a Huffman tree.
///
/// Frequencies are only meaningful for trees built from a
/// [`FrequencyTable`]; trees read back from a stream header carry zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol with no children.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: Symbol,
        /// Occurrence count.
        frequency: u64,
    },
    /// A node with exactly two children.
    Internal {
        /// Sum of the children's frequencies.
        frequency: u64,
        /// Subtree reached with bit 0.
        left: Box<HuffmanNode>,
        /// Subtree reached with bit 1.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Create a leaf.
    pub fn leaf(symbol: Symbol, frequency: u64) -> Self {
        HuffmanNode::Leaf { symbol, frequency }
    }

    /// Join two subtrees; `left` is reached with 0, `right` with 1.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Frequency of this node.
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } | HuffmanNode::Internal { frequency, .. } => {
                *frequency
            }
        }
    }

    /// The symbol if this node is a leaf.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path in this subtree.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry ordering nodes by frequency, then by creation order.
#[derive(Debug)]
struct HeapEntry {
    frequency: u64,
    order: u32,
    node: HuffmanNode,
}

impl HeapEntry {
    fn new(node: HuffmanNode, order: u32) -> Self {
        Self {
            frequency: node.frequency(),
            order,
            node,
        }
    }

    fn key(&self) -> (u64, u32) {
        (self.frequency, self.order)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A complete Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Wrap an existing root.
    pub fn from_root(root: HuffmanNode) -> Self {
        Self { root }
    }

    /// Build the tree for a frequency table.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let leaves: Vec<HeapEntry> = frequencies
            .iter()
            .map(|(symbol, count)| {
                HeapEntry::new(HuffmanNode::leaf(symbol, count), symbol.value() as u32)
            })
            .collect();

        let leaf_count = leaves.len();
        let mut heap = MinHeap::from_vec(leaves);
        let mut next_order = Symbol::COUNT as u32;

        let root = loop {
            let Some(first) = heap.extract_min() else {
                return Err(HuffpackError::EmptyAlphabet);
            };
            let Some(second) = heap.extract_min() else {
                break first.node;
            };
            let merged = HuffmanNode::merge(first.node, second.node);
            heap.insert(HeapEntry::new(merged, next_order));
            next_order += 1;
        };

        debug!(
            "built Huffman tree: {} leaves, {} merges, depth {}",
            leaf_count,
            next_order - Symbol::COUNT as u32,
            root.depth()
        );

        Ok(Self { root })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
