//! Error types for hufpak operations.
//!
//! Every failure of a compress or decompress call is reported as one
//! [`HufpakError`] kind. None of them is retried internally; the caller
//! decides whether to re-open a source or surface the failure.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for hufpak operations.
#[derive(Debug, Error)]
pub enum HufpakError {
    /// The input could not be opened, mapped or read.
    #[error("Cannot read source {}: {source}", path.display())]
    SourceUnavailable {
        /// Path of the source.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output could not be created, written or renamed into place.
    #[error("Cannot write destination {}: {source}", path.display())]
    SinkUnavailable {
        /// Path of the destination.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// There is nothing to compress.
    #[error("Empty input: nothing to encode")]
    EmptyInput,

    /// The artifact header is inconsistent with the available bytes.
    #[error("Malformed header: {message}")]
    MalformedHeader {
        /// Description of the header error.
        message: String,
    },

    /// The payload ended before the declared number of symbols was decoded.
    #[error("Truncated payload: decoded {decoded} of {expected} symbols")]
    TruncatedPayload {
        /// Symbols decoded before the payload ran out.
        decoded: u64,
        /// Symbols declared by the header.
        expected: u64,
    },

    /// One byte value occurs more often than a header record can count.
    #[error("Input too large: byte {symbol:#04x} occurs more than {} times", u32::MAX)]
    FrequencyOverflow {
        /// Byte value whose count overflowed.
        symbol: u8,
    },

    /// The encoder was given a byte its frequency table never counted.
    #[error("Symbol {symbol:#04x} has no code: data differs from the counted input")]
    UnknownSymbol {
        /// Byte value without a code.
        symbol: u8,
    },

    /// A left/right step was attempted from a leaf node.
    #[error("Degenerate tree misuse: cannot step into a child of leaf node {node}")]
    DegenerateTreeMisuse {
        /// Arena index of the offending leaf.
        node: usize,
    },

    /// I/O error from a caller-supplied reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for hufpak operations.
pub type Result<T> = std::result::Result<T, HufpakError>;

impl HufpakError {
    /// Create a source unavailable error.
    pub fn source_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a sink unavailable error.
    pub fn sink_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::SinkUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a truncated payload error.
    pub fn truncated(decoded: u64, expected: u64) -> Self {
        Self::TruncatedPayload { decoded, expected }
    }

    /// Create a frequency overflow error.
    pub fn frequency_overflow(symbol: u8) -> Self {
        Self::FrequencyOverflow { symbol }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u8) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Create a degenerate tree misuse error.
    pub fn degenerate_tree(node: usize) -> Self {
        Self::DegenerateTreeMisuse { node }
    }
}
