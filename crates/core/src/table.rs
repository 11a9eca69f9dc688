//! Symbol frequency table carried in the frame header.
//!
//! Entry order is the header order, and it matters: leaves are pushed into
//! the heap in this order, which fixes how frequency ties are broken.

use crate::error::FormatError;

/// One `(symbol, count)` pair from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Single ASCII symbol
    pub symbol: u8,
    /// How many times the symbol occurs in the decoded text
    pub count: u32,
}

impl FrequencyEntry {
    pub fn new(symbol: u8, count: u32) -> Self {
        Self { symbol, count }
    }
}

/// Ordered symbol → count mapping.
///
/// # Invariants
/// - every symbol is ASCII
/// - no symbol appears twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Build a table from entries in header order.
    ///
    /// # Errors
    /// - `FormatError::NonAsciiSymbol` if a symbol byte is >= 0x80
    /// - `FormatError::DuplicateSymbol` if a symbol is repeated
    ///
    /// An empty table is accepted here; tree construction rejects it.
    pub fn from_entries(entries: Vec<FrequencyEntry>) -> Result<Self, FormatError> {
        let mut seen = [false; 128];

        for (index, entry) in entries.iter().enumerate() {
            if !entry.symbol.is_ascii() {
                return Err(FormatError::NonAsciiSymbol {
                    byte: entry.symbol,
                    index,
                });
            }
            let slot = &mut seen[entry.symbol as usize];
            if *slot {
                return Err(FormatError::DuplicateSymbol {
                    symbol: char::from(entry.symbol),
                    index,
                });
            }
            *slot = true;
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in header order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Declared count for `symbol`, or `None` if it is not in the table.
    pub fn count_of(&self, symbol: u8) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.count)
    }

    /// Sum of all declared counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_header_order() {
        let table = FrequencyTable::from_entries(vec![
            FrequencyEntry::new(b'z', 1),
            FrequencyEntry::new(b'a', 7),
            FrequencyEntry::new(b'm', 0),
        ])
        .unwrap();

        let symbols: Vec<u8> = table.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, b"zam");
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 8);
        assert_eq!(table.count_of(b'a'), Some(7));
        assert_eq!(table.count_of(b'm'), Some(0));
        assert_eq!(table.count_of(b'q'), None);
    }

    #[test]
    fn test_rejects_non_ascii() {
        let result = FrequencyTable::from_entries(vec![
            FrequencyEntry::new(b'a', 1),
            FrequencyEntry::new(0xC3, 1),
        ]);
        assert_eq!(
            result,
            Err(FormatError::NonAsciiSymbol {
                byte: 0xC3,
                index: 1
            })
        );
    }

    #[test]
    fn test_rejects_duplicate() {
        let result = FrequencyTable::from_entries(vec![
            FrequencyEntry::new(b'|', 4),
            FrequencyEntry::new(b'0', 2),
            FrequencyEntry::new(b'|', 1),
        ]);
        assert_eq!(
            result,
            Err(FormatError::DuplicateSymbol {
                symbol: '|',
                index: 2
            })
        );
    }

    #[test]
    fn test_total_does_not_overflow() {
        let table = FrequencyTable::from_entries(vec![
            FrequencyEntry::new(b'a', u32::MAX),
            FrequencyEntry::new(b'b', u32::MAX),
        ])
        .unwrap();
        assert_eq!(table.total(), 2 * u32::MAX as u64);
    }

    #[test]
    fn test_empty_is_allowed() {
        let table = FrequencyTable::from_entries(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
