//! Code table derivation.
//!
//! Codes are read off the tree with an explicit stack (no recursion):
//! descending left appends `0`, descending right appends `1`, and the left
//! subtree is visited before the right one. A tree made of a single leaf
//! gives its symbol the one-bit code `0`.

use crate::format::MAX_SYMBOLS;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use log::trace;
use std::fmt;

/// A variable-length code of up to 64 bits, first bit in the most
/// significant position of `bits`.
///
/// Frequencies are `u32` and there are at most 256 of them, so the tree
/// depth stays far below 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u64,
    len: u8,
}

impl Code {
    /// The empty code (root of the tree).
    pub const EMPTY: Self = Self { bits: 0, len: 0 };

    /// Create a code from its low `len` bits.
    pub const fn new(bits: u64, len: u8) -> Self {
        Self { bits, len }
    }

    /// Code bits, right-aligned.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// This code extended by one bit.
    fn push(self, bit: bool) -> Self {
        debug_assert!(self.len < 64, "code longer than 64 bits");
        Self {
            bits: (self.bits << 1) | bit as u64,
            len: self.len + 1,
        }
    }

    /// Whether `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        if self.len == 0 {
            return true;
        }
        other.bits >> (other.len - self.len) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            let bit = (self.bits >> i) & 1;
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Symbol to code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; MAX_SYMBOLS],
}

impl CodeTable {
    /// Derive the code of every leaf of `tree`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = [None; MAX_SYMBOLS];
        let mut stack = vec![(tree.root(), Code::EMPTY)];

        while let Some((id, code)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    let code = if code.is_empty() {
                        Code::new(0, 1)
                    } else {
                        code
                    };
                    trace!("symbol {:#04x} -> {}", symbol, code);
                    codes[symbol as usize] = Some(code);
                }
                Node::Internal { left, right, .. } => {
                    // Right first so that the left subtree is popped first.
                    stack.push((right, code.push(true)));
                    stack.push((left, code.push(false)));
                }
            }
        }

        Self { codes }
    }

    /// Code of `symbol`, if it is present.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Present symbols and their codes, by ascending symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Longest code length.
    pub fn max_len(&self) -> u8 {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Payload size in bits for data with the given frequencies.
    pub fn payload_bits(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| frequencies.get(symbol) as u64 * code.len() as u64)
            .sum()
    }
}
