//! Artifact inspection without decoding.

use crate::code::CodeTable;
use crate::header::Header;
use crate::tree::HuffmanTree;
use hufpak_core::error::{HufpakError, Result};
use serde::Serialize;

/// One header record with its derived code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolInfo {
    /// Byte value.
    pub symbol: u8,
    /// Occurrences in the original data.
    pub frequency: u32,
    /// Derived code as a string of `0`/`1`.
    pub code: String,
}

/// Summary of a compressed artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    /// Distinct symbols in the header.
    pub unique_symbols: usize,
    /// Symbols the payload decodes to (original size).
    pub total_symbols: u64,
    /// Header size in bytes.
    pub header_len: usize,
    /// Payload size in bytes.
    pub payload_len: usize,
    /// Payload bits carrying codes.
    pub payload_bits: u64,
    /// Zero bits padding the final payload byte.
    pub pad_bits: u8,
    /// Longest code length.
    pub max_code_len: u8,
    /// Records in header order.
    pub symbols: Vec<SymbolInfo>,
}

impl ArtifactInfo {
    /// Artifact size in bytes.
    pub fn artifact_len(&self) -> u64 {
        (self.header_len + self.payload_len) as u64
    }
}

/// Parse the header of `artifact` and describe it.
///
/// # Errors
///
/// Returns [`HufpakError::MalformedHeader`] for an invalid header and
/// [`HufpakError::TruncatedPayload`] if the payload is too short for the
/// declared symbol count.
pub fn inspect(artifact: &[u8]) -> Result<ArtifactInfo> {
    let (header, offset) = Header::parse(artifact)?;
    let frequencies = header.frequencies();
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);

    let payload_len = artifact.len() - offset;
    let payload_bits = codes.payload_bits(&frequencies);
    if (payload_len as u64) < payload_bits.div_ceil(8) {
        return Err(HufpakError::truncated(
            0,
            header.total_symbols(),
        ));
    }

    let symbols = header
        .records()
        .iter()
        .map(|&(symbol, frequency)| SymbolInfo {
            symbol,
            frequency,
            code: codes
                .get(symbol)
                .map(|c| c.to_string())
                .unwrap_or_default(),
        })
        .collect();

    Ok(ArtifactInfo {
        unique_symbols: header.unique_symbols(),
        total_symbols: header.total_symbols(),
        header_len: offset,
        payload_len,
        payload_bits,
        pad_bits: ((8 - payload_bits % 8) % 8) as u8,
        max_code_len: codes.max_len(),
        symbols,
    })
}
