//! Artifact header: the frequency table in wire form.

use crate::format::{HEADER_COUNT_LEN, MAX_SYMBOLS, RECORD_LEN, header_len};
use crate::frequency::FrequencyTable;
use hufpak_core::error::{HufpakError, Result};
use std::io::Write;

/// Unique-symbol count followed by (symbol, frequency) records.
///
/// Records are kept in the tree builder's seed order: ascending frequency,
/// ties by ascending symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    records: Vec<(u8, u32)>,
}

impl Header {
    /// Header describing `frequencies`.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        Self {
            records: frequencies.sorted_pairs(),
        }
    }

    /// The (symbol, frequency) records, in wire order.
    pub fn records(&self) -> &[(u8, u32)] {
        &self.records
    }

    /// Number of distinct symbols.
    pub fn unique_symbols(&self) -> usize {
        self.records.len()
    }

    /// Total number of symbols to decode.
    pub fn total_symbols(&self) -> u64 {
        self.records.iter().map(|&(_, f)| f as u64).sum()
    }

    /// Serialized length in bytes.
    pub fn encoded_len(&self) -> usize {
        header_len(self.records.len())
    }

    /// Rebuild the frequency table.
    pub fn frequencies(&self) -> FrequencyTable {
        self.records.iter().copied().collect()
    }

    /// Serialize the header.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(&(self.records.len() as u32).to_le_bytes());
        for &(symbol, frequency) in &self.records {
            buf.push(symbol);
            buf.extend_from_slice(&frequency.to_le_bytes());
        }
        writer.write_all(&buf)?;
        Ok(())
    }

    /// Parse a header from the start of `data`.
    ///
    /// Returns the header and the number of bytes it occupies; the payload
    /// starts right after.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::MalformedHeader`] if the data is shorter than
    /// the declared record count implies, declares zero or more than 256
    /// symbols, repeats a symbol, or gives a symbol a zero frequency.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let count_bytes: [u8; HEADER_COUNT_LEN] = data
            .get(..HEADER_COUNT_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| {
                HufpakError::malformed_header(format!(
                    "need {} bytes for the symbol count, found {}",
                    HEADER_COUNT_LEN,
                    data.len()
                ))
            })?;
        let count = u32::from_le_bytes(count_bytes);

        if count == 0 {
            return Err(HufpakError::malformed_header("zero unique symbols"));
        }
        if count as usize > MAX_SYMBOLS {
            return Err(HufpakError::malformed_header(format!(
                "declared {} unique symbols, at most {} exist",
                count, MAX_SYMBOLS
            )));
        }

        let count = count as usize;
        let len = header_len(count);
        if data.len() < len {
            return Err(HufpakError::malformed_header(format!(
                "declared {} records ({} bytes), found {} bytes",
                count,
                len,
                data.len()
            )));
        }

        let mut seen = [false; MAX_SYMBOLS];
        let mut records = Vec::with_capacity(count);
        for record in data[HEADER_COUNT_LEN..len].chunks_exact(RECORD_LEN) {
            let symbol = record[0];
            let frequency = u32::from_le_bytes([record[1], record[2], record[3], record[4]]);

            if frequency == 0 {
                return Err(HufpakError::malformed_header(format!(
                    "symbol {:#04x} has zero frequency",
                    symbol
                )));
            }
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(HufpakError::malformed_header(format!(
                    "symbol {:#04x} listed twice",
                    symbol
                )));
            }
            records.push((symbol, frequency));
        }

        Ok((Self { records }, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(header: &Header) -> Vec<u8> {
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_wire_layout() {
        let header = Header::from_frequencies(&FrequencyTable::count(b"aaabb").unwrap());
        assert_eq!(
            encode(&header),
            vec![
                2, 0, 0, 0, // two records
                b'b', 2, 0, 0, 0, // lighter symbol first
                b'a', 3, 0, 0, 0,
            ]
        );
        assert_eq!(header.encoded_len(), 14);
        assert_eq!(header.total_symbols(), 5);
    }

    #[test]
    fn test_parse_leaves_payload() {
        let header = Header::from_frequencies(&FrequencyTable::count(b"hello world").unwrap());
        let mut data = encode(&header);
        data.extend_from_slice(&[0xAA, 0xBB]);

        let (parsed, consumed) = Header::parse(&data).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(consumed, header.encoded_len());
        assert_eq!(&data[consumed..], &[0xAA, 0xBB]);
        assert_eq!(parsed.frequencies(), FrequencyTable::count(b"hello world").unwrap());
    }

    #[test]
    fn test_short_count() {
        let err = Header::parse(&[1, 0]).unwrap_err();
        assert!(matches!(err, HufpakError::MalformedHeader { .. }));
    }

    #[test]
    fn test_zero_symbols() {
        let err = Header::parse(&[0, 0, 0, 0, 0xFF]).unwrap_err();
        assert!(err.to_string().contains("zero unique symbols"));
    }

    #[test]
    fn test_too_many_symbols() {
        let err = Header::parse(&257u32.to_le_bytes()).unwrap_err();
        assert!(matches!(err, HufpakError::MalformedHeader { .. }));
    }

    #[test]
    fn test_truncated_records() {
        // Declares 3 records but carries only one.
        let data = [3, 0, 0, 0, b'x', 1, 0, 0, 0];
        let err = Header::parse(&data).unwrap_err();
        assert!(err.to_string().contains("declared 3 records"));
    }

    #[test]
    fn test_duplicate_symbol() {
        let data = [2, 0, 0, 0, b'x', 1, 0, 0, 0, b'x', 2, 0, 0, 0];
        let err = Header::parse(&data).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_zero_frequency() {
        let data = [1, 0, 0, 0, b'x', 0, 0, 0, 0];
        let err = Header::parse(&data).unwrap_err();
        assert!(err.to_string().contains("zero frequency"));
    }
}
