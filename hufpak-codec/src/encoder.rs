//! Huffman encoder (compression).

use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::header::Header;
use crate::tree::HuffmanTree;
use hufpak_core::bitstream::BitWriter;
use hufpak_core::error::{HufpakError, Result};
use log::debug;
use std::io::Write;

/// Huffman encoder for one input.
///
/// Built from the input's frequency table (first pass); [`encode`] then
/// walks the same input again to emit the artifact (second pass).
///
/// [`encode`]: HuffmanEncoder::encode
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    header: Header,
    codes: CodeTable,
    payload_bits: u64,
}

impl HuffmanEncoder {
    /// Create an encoder for data with the given symbol frequencies.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::EmptyInput`] if the table is empty.
    pub fn new(frequencies: &FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::build(frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        let payload_bits = codes.payload_bits(frequencies);

        debug!(
            "encoder ready: {} symbols, {} distinct, longest code {} bits, payload {} bits",
            frequencies.total(),
            codes.len(),
            codes.max_len(),
            payload_bits
        );

        Ok(Self {
            header: Header::from_frequencies(frequencies),
            codes,
            payload_bits,
        })
    }

    /// Count the symbols of `data` and create an encoder for it.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::EmptyInput`] for empty data and
    /// [`HufpakError::FrequencyOverflow`] if a byte value occurs more than
    /// `u32::MAX` times.
    pub fn for_data(data: &[u8]) -> Result<Self> {
        Self::new(&FrequencyTable::count(data)?)
    }

    /// Header that will be written.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Code table in use.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Size of the complete artifact in bytes.
    pub fn output_len(&self) -> u64 {
        self.header.encoded_len() as u64 + self.payload_bits.div_ceil(8)
    }

    /// Write the header followed by the packed payload for `data`.
    ///
    /// `data` must be the input the frequency table was counted from.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::UnknownSymbol`] if `data` holds a byte the
    /// table never counted. Writer failures surface as [`HufpakError::Io`].
    ///
    /// # Returns
    ///
    /// Number of bytes written.
    pub fn encode<W: Write>(&self, data: &[u8], writer: &mut W) -> Result<u64> {
        self.header.write_to(writer)?;

        let mut bits = BitWriter::new(&mut *writer);
        for &byte in data {
            let code = self
                .codes
                .get(byte)
                .ok_or_else(|| HufpakError::unknown_symbol(byte))?;
            bits.write_bits(code.bits(), code.len())?;
        }
        let payload_bits = bits.bits_written();
        bits.finish()?;

        Ok(self.header.encoded_len() as u64 + payload_bits.div_ceil(8))
    }
}
