//! Bit-string helpers for diagnostics.
//!
//! [`to_bit_string`] renders raw bytes as ASCII `0`/`1` text, MSB first, and
//! [`rle_encode`] run-length encodes such text as `<count><char>` pairs.

use std::fmt::Write;

/// Render each byte as eight `0`/`1` characters, most significant bit first.
///
/// # Example
///
/// ```
/// use hufpak_codec::bits::to_bit_string;
///
/// assert_eq!(to_bit_string(&[0xA5, 0x01]), "1010010100000001");
/// ```
pub fn to_bit_string(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8);
    for &byte in data {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:08b}", byte);
    }
    out
}

/// Run-length encode `input` as a decimal count followed by the repeated
/// character, for every run.
///
/// # Example
///
/// ```
/// use hufpak_codec::bits::rle_encode;
///
/// assert_eq!(rle_encode("0001100"), "302120");
/// assert_eq!(rle_encode(""), "");
/// ```
pub fn rle_encode(input: &str) -> String {
    let mut out = String::new();
    let mut chars = input.chars().peekable();

    while let Some(current) = chars.next() {
        let mut count = 1usize;
        while chars.next_if_eq(&current).is_some() {
            count += 1;
        }
        let _ = write!(out, "{}{}", count, current);
    }
    out
}
