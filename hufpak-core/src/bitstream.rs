//! MSB-first bit-level I/O for the Huffman payload.
//!
//! The payload packs codes most-significant-bit first: the first bit of the
//! stream is bit 7 of byte 0. A partial final byte is padded with zero bits
//! on its low-order side.
//!
//! # Example
//!
//! ```
//! use hufpak_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! let output = writer.finish().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&output);
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(false));
//! ```

use crate::error::Result;
use std::io::Write;

/// Bytes staged before they are handed to the underlying writer.
const STAGING_CAPACITY: usize = 8 * 1024;

/// MSB-first bit reader over a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the byte holding the next bit.
    byte_pos: usize,
    /// Bits already consumed from `data[byte_pos]` (0-7).
    bit_offset: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new MSB-first reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_offset: 0,
            total_bits_read: 0,
        }
    }

    /// Read one bit, or `None` once the data is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.byte_pos)?;
        let bit = (byte >> (7 - self.bit_offset)) & 1 == 1;

        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.bit_offset = 0;
            self.byte_pos += 1;
        }
        self.total_bits_read += 1;

        Some(bit)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Number of bits still available.
    pub fn bits_remaining(&self) -> u64 {
        (self.data.len() as u64 * 8).saturating_sub(self.total_bits_read)
    }
}

/// MSB-first bit writer wrapping any `Write` implementation.
///
/// Complete bytes are staged internally and written out in blocks. Call
/// [`BitWriter::finish`] to pad the final byte and recover the writer.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Complete bytes not yet written.
    staged: Vec<u8>,
    /// Bit buffer (MSB-first, right-aligned).
    buffer: u64,
    /// Number of pending bits in buffer (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new MSB-first writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            staged: Vec::with_capacity(STAGING_CAPACITY),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far, padding excluded.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// `count` may be anything from 0 to 64.
    pub fn write_bits(&mut self, value: u64, count: u8) -> Result<()> {
        debug_assert!(count <= 64, "Cannot write more than 64 bits at once");

        if count > 32 {
            let low = count - 32;
            self.push_bits((value >> low) as u32, 32);
            self.push_bits(value as u32, low);
        } else {
            self.push_bits(value as u32, count);
        }
        self.total_bits_written += count as u64;

        if self.staged.len() >= STAGING_CAPACITY {
            self.writer.write_all(&self.staged)?;
            self.staged.clear();
        }
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u64, 1)
    }

    #[inline]
    fn push_bits(&mut self, value: u32, count: u8) {
        if count == 0 {
            return;
        }
        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };
        self.buffer = (self.buffer << count) | (value & mask) as u64;
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.staged.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Pad the final byte with zero bits, flush, and return the writer.
    pub fn finish(mut self) -> Result<W> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.staged.push(byte);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.write_all(&self.staged)?;
        self.staged.clear();
        self.writer.flush()?;
        Ok(self.writer)
    }
}
