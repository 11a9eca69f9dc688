//! Optional integrity pass: decoded symbol counts versus the header.

use crate::error::ValidationError;
use crate::table::FrequencyTable;

/// Check that every symbol in `table` occurs in `text` exactly as often as
/// declared. Entries are checked in header order; the first mismatch is
/// reported.
pub fn validate_counts(table: &FrequencyTable, text: &str) -> Result<(), ValidationError> {
    let mut observed = [0u64; 256];
    for &byte in text.as_bytes() {
        observed[byte as usize] += 1;
    }

    for entry in table.iter() {
        let seen = observed[entry.symbol as usize];
        if seen != entry.count as u64 {
            return Err(ValidationError::CountMismatch {
                symbol: char::from(entry.symbol),
                declared: entry.count,
                observed: seen,
            });
        }
    }

    Ok(())
}
