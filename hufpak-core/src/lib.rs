//! # hufpak Core
//!
//! Core components for the hufpak Huffman compressor.
//!
//! This crate provides the building blocks the codec consumes:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for the packed payload
//! - [`source`]: Byte sources (memory-mapped or buffered input files)
//! - [`sink`]: Atomic byte sink (temporary file renamed on commit)
//! - [`options`]: I/O options shared by file-level operations
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     compress, decompress, info, dump                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     frequency table, prefix tree, header, payload       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     BitReader/BitWriter, SourceBytes, AtomicFile        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hufpak_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b0001_1, 5).unwrap();
//! let packed = writer.finish().unwrap();
//! assert_eq!(packed, vec![0b0001_1000]);
//!
//! let mut reader = BitReader::new(&packed);
//! assert_eq!(reader.read_bit(), Some(false));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap;
pub mod options;
pub mod sink;
pub mod source;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HufpakError, Result};
pub use options::IoOptions;
pub use sink::AtomicFile;
pub use source::SourceBytes;
