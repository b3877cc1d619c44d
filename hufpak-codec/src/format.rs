//! Compressed artifact layout constants.
//!
//! ```text
//! [u32 unique_symbol_count]
//! repeated unique_symbol_count times:
//!     [u8 symbol][u32 frequency]
//! [payload: packed bits, MSB-first per byte, zero-padded tail]
//! ```
//!
//! All integers are little-endian.

/// Size of the leading unique-symbol count.
pub const HEADER_COUNT_LEN: usize = 4;

/// Size of one (symbol, frequency) record.
pub const RECORD_LEN: usize = 5;

/// Number of distinct byte values.
pub const MAX_SYMBOLS: usize = 256;

/// Conventional file extension for compressed artifacts.
pub const EXTENSION: &str = "huf";

/// Header length for `unique_symbols` records.
pub const fn header_len(unique_symbols: usize) -> usize {
    HEADER_COUNT_LEN + unique_symbols * RECORD_LEN
}
