//! Huffman decoder (decompression).
//!
//! The decoder never receives the tree, only the header frequencies. It
//! rebuilds the tree with the same algorithm as the encoder, then walks it
//! one payload bit at a time: `0` steps left, `1` steps right, and reaching
//! a leaf emits its symbol and returns to the root. Decoding stops as soon
//! as the header's total symbol count has been emitted, so pad bits in the
//! final byte are never interpreted.

use crate::header::Header;
use crate::tree::{HuffmanTree, Node};
use hufpak_core::bitstream::BitReader;
use hufpak_core::error::{HufpakError, Result};
use log::debug;
use std::io::Write;

/// Decoded bytes buffered before each write to the output.
const CHUNK_SIZE: usize = 64 * 1024;

/// Huffman decoder for one artifact.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
    total: u64,
}

impl HuffmanDecoder {
    /// Rebuild the tree described by `header`.
    pub fn new(header: &Header) -> Result<Self> {
        let tree = HuffmanTree::build(&header.frequencies())?;
        Ok(Self {
            tree,
            total: header.total_symbols(),
        })
    }

    /// Number of symbols the payload must yield.
    pub fn total_symbols(&self) -> u64 {
        self.total
    }

    /// Decode `payload` into a new buffer.
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        // Each symbol costs at least one bit, which caps what a lying header
        // can make us reserve.
        let capacity = self.total.min(payload.len() as u64 * 8);
        let mut output = Vec::with_capacity(capacity as usize);
        self.decode_to(payload, &mut output)?;
        Ok(output)
    }

    /// Decode `payload` into `writer`.
    ///
    /// On error the writer may already hold part of the output.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::TruncatedPayload`] if the payload ends before
    /// the declared number of symbols has been decoded.
    ///
    /// # Returns
    ///
    /// Number of bytes written.
    pub fn decode_to<W: Write>(&self, payload: &[u8], writer: &mut W) -> Result<u64> {
        let (decoded, used_bits) = if self.tree.is_single_leaf() {
            self.decode_single(payload, writer)?
        } else {
            self.decode_walk(payload, writer)?
        };

        let trailing = payload.len() as u64 - used_bits.div_ceil(8);
        if trailing > 0 {
            debug!("ignoring {} trailing payload bytes", trailing);
        }
        Ok(decoded)
    }

    /// A lone leaf has no branches to walk: every symbol is the same and
    /// each one occupies a single `0` bit.
    fn decode_single<W: Write>(&self, payload: &[u8], writer: &mut W) -> Result<(u64, u64)> {
        let root = self.tree.node(self.tree.root());
        let symbol = root
            .symbol()
            .ok_or_else(|| HufpakError::degenerate_tree(self.tree.root().index()))?;

        let available = payload.len() as u64 * 8;
        if available < self.total {
            return Err(HufpakError::truncated(available, self.total));
        }

        let chunk = vec![symbol; CHUNK_SIZE.min(self.total as usize)];
        let mut remaining = self.total;
        while remaining > 0 {
            let n = remaining.min(chunk.len() as u64) as usize;
            writer.write_all(&chunk[..n])?;
            remaining -= n as u64;
        }
        Ok((self.total, self.total))
    }

    fn decode_walk<W: Write>(&self, payload: &[u8], writer: &mut W) -> Result<(u64, u64)> {
        let mut reader = BitReader::new(payload);
        let mut buffer = Vec::with_capacity(CHUNK_SIZE.min(self.total as usize));
        let root = self.tree.root();
        let mut node = root;
        let mut decoded = 0u64;

        while decoded < self.total {
            let bit = reader
                .read_bit()
                .ok_or_else(|| HufpakError::truncated(decoded, self.total))?;
            node = self.tree.child(node, bit)?;

            if let Node::Leaf { symbol, .. } = *self.tree.node(node) {
                buffer.push(symbol);
                decoded += 1;
                node = root;

                if buffer.len() >= CHUNK_SIZE {
                    writer.write_all(&buffer)?;
                    buffer.clear();
                }
            }
        }

        writer.write_all(&buffer)?;
        Ok((decoded, reader.bits_read()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn header(data: &[u8]) -> Header {
        Header::from_frequencies(&FrequencyTable::count(data).unwrap())
    }

    #[test]
    fn test_decode_aaabb() {
        let decoder = HuffmanDecoder::new(&header(b"aaabb")).unwrap();
        assert_eq!(decoder.total_symbols(), 5);
        assert_eq!(decoder.decode(&[0b1110_0000]).unwrap(), b"aaabb");
    }

    #[test]
    fn test_pad_bits_are_ignored() {
        // Pad bits of ones would decode as extra 'a's if not for the count.
        let decoder = HuffmanDecoder::new(&header(b"aaabb")).unwrap();
        assert_eq!(decoder.decode(&[0b1110_0111]).unwrap(), b"aaabb");
    }

    #[test]
    fn test_truncated_payload() {
        let data = b"abcdefghabcdefgh";
        let decoder = HuffmanDecoder::new(&header(data)).unwrap();
        // 16 symbols of 3 bits need 6 bytes.
        let err = decoder.decode(&[0u8; 2]).unwrap_err();
        match err {
            HufpakError::TruncatedPayload { decoded, expected } => {
                assert_eq!(expected, 16);
                assert!(decoded < 16);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_symbol() {
        let decoder = HuffmanDecoder::new(&header(&[7u8; 10])).unwrap();
        assert_eq!(decoder.decode(&[0, 0]).unwrap(), vec![7u8; 10]);

        let err = decoder.decode(&[0]).unwrap_err();
        assert!(matches!(
            err,
            HufpakError::TruncatedPayload {
                decoded: 8,
                expected: 10
            }
        ));
    }

    #[test]
    fn test_large_output_is_chunked() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 7) as u8).collect();
        let encoder = crate::encoder::HuffmanEncoder::for_data(&data).unwrap();
        let mut artifact = Vec::new();
        encoder.encode(&data, &mut artifact).unwrap();

        let (parsed, offset) = Header::parse(&artifact).unwrap();
        let decoder = HuffmanDecoder::new(&parsed).unwrap();
        let mut out = Vec::new();
        let written = decoder.decode_to(&artifact[offset..], &mut out).unwrap();
        assert_eq!(written, data.len() as u64);
        assert_eq!(out, data);
    }
}
