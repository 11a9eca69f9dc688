//! Per-call decode statistics.
//!
//! Collected by [`crate::codec::decode_with`] (or `decode_frame`) and
//! returned next to the decoded text. Nothing here is shared between calls.

use std::fmt;
use std::time::Duration;

/// What one decode call consumed and produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeStats {
    // === Input ===
    /// Size of the whole input buffer
    pub input_bytes: usize,

    /// Entries in the frequency table
    pub symbol_count: usize,

    /// Declared meaningful payload bits
    pub packed_bits: usize,

    /// Declared payload bytes
    pub packed_bytes: usize,

    /// Declared decoded length (informational)
    pub declared_unpacked_bytes: usize,

    // === Decoding ===
    /// Longest code length in the tree
    pub tree_depth: usize,

    /// Bits actually consumed by the walk
    pub bits_consumed: usize,

    /// Symbols emitted
    pub symbols_emitted: usize,

    /// Whether the count check ran
    pub validated: bool,

    /// Wall time for parse + build + walk (+ validation)
    pub elapsed: Duration,
}

impl DecodeStats {
    /// Payload bytes per decoded byte.
    ///
    /// Returns 0.0 if nothing was decoded.
    pub fn compression_ratio(&self) -> f64 {
        if self.symbols_emitted == 0 {
            0.0
        } else {
            self.packed_bytes as f64 / self.symbols_emitted as f64
        }
    }

    /// Average code length in bits.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols_emitted == 0 {
            0.0
        } else {
            self.bits_consumed as f64 / self.symbols_emitted as f64
        }
    }

    /// Whether the output length matches the header's `unpacked_bytes`.
    pub fn matches_declared_length(&self) -> bool {
        self.symbols_emitted == self.declared_unpacked_bytes
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Decode Summary ===")?;
        writeln!(f, "Duration: {} us", self.elapsed.as_micros())?;
        writeln!(f, "Input: {} bytes", self.input_bytes)?;
        writeln!(f, "Symbols in table: {}", self.symbol_count)?;
        writeln!(f, "Tree depth: {}", self.tree_depth)?;
        writeln!(
            f,
            "Payload: {} bits in {} bytes ({} consumed)",
            self.packed_bits, self.packed_bytes, self.bits_consumed
        )?;
        writeln!(
            f,
            "Output: {} bytes (header declares {})",
            self.symbols_emitted, self.declared_unpacked_bytes
        )?;
        writeln!(f, "Ratio: {:.1}%", self.compression_ratio() * 100.0)?;
        writeln!(f, "Bits/symbol: {:.2}", self.bits_per_symbol())?;
        write!(
            f,
            "Validation: {}",
            if self.validated { "PASSED" } else { "skipped" }
        )
    }
}
