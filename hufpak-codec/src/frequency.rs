//! Symbol frequency counting.

use crate::format::MAX_SYMBOLS;
use hufpak_core::error::{HufpakError, Result};

/// Occurrence count of every byte value.
///
/// Symbols with a zero count are absent: they get no tree node, no code and
/// no header record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; MAX_SYMBOLS],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            counts: [0; MAX_SYMBOLS],
        }
    }
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::FrequencyOverflow`] if one byte value occurs
    /// more than `u32::MAX` times.
    pub fn count(data: &[u8]) -> Result<Self> {
        let mut table = Self::new();
        table.update(data)?;
        Ok(table)
    }

    /// Add the bytes of `data` to the counts.
    ///
    /// On overflow the counts already added by this call are kept; the table
    /// should be discarded.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        for &byte in data {
            let count = &mut self.counts[byte as usize];
            *count = count
                .checked_add(1)
                .ok_or_else(|| HufpakError::frequency_overflow(byte))?;
        }
        Ok(())
    }

    /// Set the count of `symbol`.
    pub fn set(&mut self, symbol: u8, frequency: u32) {
        self.counts[symbol as usize] = frequency;
    }

    /// Count of `symbol`.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts: the number of symbols a decoder must emit.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Present symbols sorted by ascending frequency, ties by ascending
    /// symbol value.
    ///
    /// This is the order of the header records and the seed order of the
    /// tree builder; both sides of the codec rely on it being identical.
    pub fn sorted_pairs(&self) -> Vec<(u8, u32)> {
        let mut pairs: Vec<(u8, u32)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
            .collect();
        pairs.sort_by_key(|&(symbol, count)| (count, symbol));
        pairs
    }
}

impl FromIterator<(u8, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, frequency) in iter {
            table.set(symbol, frequency);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let table = FrequencyTable::count(b"aaabb").unwrap();
        assert_eq!(table.get(b'a'), 3);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b'c'), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::count(b"").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.total(), 0);
        assert!(table.sorted_pairs().is_empty());
    }

    #[test]
    fn test_sorted_pairs_frequency_then_symbol() {
        let table = FrequencyTable::count(b"ccbbbaaad").unwrap();
        assert_eq!(
            table.sorted_pairs(),
            vec![(b'd', 1), (b'c', 2), (b'a', 3), (b'b', 3)]
        );
    }

    #[test]
    fn test_total_exceeds_u32() {
        let table: FrequencyTable = [(0u8, u32::MAX), (1u8, u32::MAX)].into_iter().collect();
        assert_eq!(table.total(), 2 * u32::MAX as u64);
    }

    #[test]
    fn test_update_accumulates() {
        let mut table = FrequencyTable::new();
        table.update(b"ab").unwrap();
        table.update(b"b").unwrap();
        assert_eq!(table, FrequencyTable::count(b"abb").unwrap());
    }

    #[test]
    fn test_update_overflow_is_refused() {
        let mut table = FrequencyTable::new();
        table.set(b'x', u32::MAX);

        let err = table.update(b"x").unwrap_err();
        assert!(matches!(err, HufpakError::FrequencyOverflow { symbol: b'x' }));
        assert_eq!(table.get(b'x'), u32::MAX);

        // Other symbols still count normally.
        table.update(b"yy").unwrap();
        assert_eq!(table.get(b'y'), 2);
    }
}
