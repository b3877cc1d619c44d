//! # hufpak-codec: Pure Rust Huffman Compression
//!
//! This crate provides lossless order-0 Huffman compression of byte streams
//! with a deterministic prefix tree, so that any two implementations of the
//! same construction rule produce byte-identical artifacts.
//!
//! ## Features
//!
//! - **Deterministic trees**: symbols are seeded by ascending frequency, ties
//!   by ascending symbol value, and equal weights leave the heap in
//!   insertion order
//! - **Arena tree**: nodes addressed by index, codes derived iteratively
//! - **Exact termination**: the header's symbol count, not an end marker,
//!   ends decoding, so pad bits are never decoded
//! - **Atomic file output**: failed runs never leave partial files
//!
//! ## Artifact Format
//!
//! ```text
//! [u32 unique_symbol_count]
//! repeated unique_symbol_count times:
//!     [u8 symbol][u32 frequency]
//! [payload: packed bits, MSB-first per byte, zero-padded tail]
//! ```
//!
//! All integers are little-endian; records follow the tree builder's seed
//! order.
//!
//! ## Example
//!
//! ```rust
//! use hufpak_codec::{compress, decompress};
//!
//! let original = b"aaabb";
//! let compressed = compress(original).unwrap();
//!
//! // 14-byte header, then "11100" packed into one byte.
//! assert_eq!(compressed.len(), 15);
//! assert_eq!(compressed[14], 0b1110_0000);
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bits;
mod code;
mod decoder;
mod encoder;
mod file;
pub mod format;
mod frequency;
mod header;
mod inspect;
mod tree;

pub use code::{Code, CodeTable};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use file::{CompressionStats, compress_file, decompress_file};
pub use frequency::FrequencyTable;
pub use header::Header;
pub use hufpak_core::{HufpakError, IoOptions, Result};
pub use inspect::{ArtifactInfo, SymbolInfo, inspect};
pub use tree::{HuffmanTree, Node, NodeId};

use std::io::Write;

/// Compress `data` into a new artifact.
///
/// # Errors
///
/// Returns [`HufpakError::EmptyInput`] if `data` is empty.
///
/// # Example
///
/// ```rust
/// use hufpak_codec::compress;
///
/// let artifact = compress(b"mississippi").unwrap();
/// // Four distinct symbols: 4 + 4 * 5 header bytes.
/// assert_eq!(u32::from_le_bytes(artifact[..4].try_into().unwrap()), 4);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let encoder = HuffmanEncoder::for_data(data)?;
    let mut output = Vec::with_capacity(encoder.output_len() as usize);
    encoder.encode(data, &mut output)?;
    Ok(output)
}

/// Compress `data` into `writer`.
///
/// # Returns
///
/// Number of bytes written.
pub fn compress_to<W: Write>(data: &[u8], writer: &mut W) -> Result<u64> {
    HuffmanEncoder::for_data(data)?.encode(data, writer)
}

/// Decompress an artifact produced by [`compress`].
///
/// # Errors
///
/// - [`HufpakError::MalformedHeader`] if the header is invalid or truncated
/// - [`HufpakError::TruncatedPayload`] if the payload is too short for the
///   declared symbol count
///
/// # Example
///
/// ```rust
/// use hufpak_codec::{compress, decompress};
///
/// let original = vec![b'z'; 1000];
/// let artifact = compress(&original).unwrap();
/// assert_eq!(decompress(&artifact).unwrap(), original);
/// ```
pub fn decompress(artifact: &[u8]) -> Result<Vec<u8>> {
    let (header, offset) = Header::parse(artifact)?;
    HuffmanDecoder::new(&header)?.decode(&artifact[offset..])
}

/// Decompress an artifact into `writer`.
///
/// On error the writer may already hold part of the output; use
/// [`decompress_file`] when the output must be all-or-nothing.
///
/// # Returns
///
/// Number of bytes written.
pub fn decompress_to<W: Write>(artifact: &[u8], writer: &mut W) -> Result<u64> {
    let (header, offset) = Header::parse(artifact)?;
    HuffmanDecoder::new(&header)?.decode_to(&artifact[offset..], writer)
}
