//! Deterministic Huffman prefix tree.
//!
//! Nodes live in an arena addressed by [`NodeId`]. Leaves are created first,
//! in the order of [`FrequencyTable::sorted_pairs`], then each merged node is
//! appended as it is built, so the last node is the root and every internal
//! node refers only to nodes created before it.
//!
//! # Construction
//!
//! 1. Seed a min-heap with one leaf per (symbol, frequency) pair, in sorted
//!    order (ascending frequency, then ascending symbol).
//! 2. Pop the two lightest nodes; the first becomes the left child and the
//!    second the right child of a new node weighing their sum.
//! 3. Push the new node and repeat until a single node remains.
//!
//! Heap keys are `(weight, NodeId)`. Node ids grow with insertion order, so
//! equal weights always leave the heap in the order they entered it and the
//! encoder and decoder derive the same tree from the same frequencies.

use crate::frequency::FrequencyTable;
use hufpak_core::error::{HufpakError, Result};
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A prefix-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A symbol; its weight is the symbol's frequency.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Frequency of the symbol.
        weight: u64,
    },
    /// A branch; its weight is the sum of its children's weights.
    Internal {
        /// Child reached by a `0` bit.
        left: NodeId,
        /// Child reached by a `1` bit.
        right: NodeId,
        /// Combined weight.
        weight: u64,
    },
}

impl Node {
    /// Weight of the node.
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    /// Symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match *self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }
}

/// Huffman prefix tree stored in an arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for the symbols present in `frequencies`.
    ///
    /// A single distinct symbol yields a tree made of one leaf.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::EmptyInput`] if no symbol has a non-zero count.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let pairs = frequencies.sorted_pairs();
        if pairs.is_empty() {
            return Err(HufpakError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(2 * pairs.len() - 1);
        let mut heap = BinaryHeap::with_capacity(pairs.len());

        for (symbol, frequency) in pairs {
            let id = NodeId(nodes.len());
            let weight = frequency as u64;
            nodes.push(Node::Leaf { symbol, weight });
            heap.push(Reverse((weight, id)));
        }

        while let (Some(Reverse((w1, left))), Some(Reverse((w2, right)))) = (heap.pop(), heap.pop())
        {
            let id = NodeId(nodes.len());
            let weight = w1 + w2;
            nodes.push(Node::Internal {
                left,
                right,
                weight,
            });
            heap.push(Reverse((weight, id)));
        }

        let root = NodeId(nodes.len() - 1);
        debug!(
            "built prefix tree: {} nodes, root weight {}",
            nodes.len(),
            nodes[root.0].weight()
        );

        Ok(Self { nodes, root })
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node stored at `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree is a single leaf (one distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.node(self.root), Node::Leaf { .. })
    }

    /// Step from `id` to its left (`false`) or right (`true`) child.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::DegenerateTreeMisuse`] if `id` is a leaf.
    #[inline]
    pub fn child(&self, id: NodeId, bit: bool) -> Result<NodeId> {
        match self.nodes[id.0] {
            Node::Internal { left, right, .. } => Ok(if bit { right } else { left }),
            Node::Leaf { .. } => Err(HufpakError::degenerate_tree(id.0)),
        }
    }
}
