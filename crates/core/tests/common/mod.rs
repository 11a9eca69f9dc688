//! Test-only frame builder.
//!
//! Produces frames the way the service does: a frequency table in order of
//! first appearance, codes taken from the tree the decoder itself builds,
//! packed MSB-first with zero padding.

#![allow(dead_code)]

use huffdec_core::{FrequencyEntry, FrequencyTable, HuffmanTree};

/// Pieces of a frame, kept separate so tests can tamper with them.
#[derive(Debug, Clone)]
pub struct FrameParts {
    pub entries: Vec<(u8, u32)>,
    pub packed_bits: u32,
    pub payload: Vec<u8>,
    pub unpacked_bytes: u32,
}

impl FrameParts {
    /// Serialize to wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = 12 + self.entries.len() * 8 + 12 + self.payload.len();

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(self.entries.len() as u32).to_le_bytes());
        for &(symbol, count) in &self.entries {
            out.extend_from_slice(&count.to_le_bytes());
            out.extend_from_slice(&[symbol, 0, 0, 0]);
        }
        out.extend_from_slice(&self.packed_bits.to_le_bytes());
        out.extend_from_slice(&(self.payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.unpacked_bytes.to_le_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Offset of the payload within `to_bytes()`.
    pub fn payload_offset(&self) -> usize {
        12 + self.entries.len() * 8 + 12
    }
}

/// Count symbols in order of first appearance.
pub fn frequencies(text: &str) -> Vec<(u8, u32)> {
    let mut entries: Vec<(u8, u32)> = Vec::new();
    for &byte in text.as_bytes() {
        match entries.iter_mut().find(|(s, _)| *s == byte) {
            Some((_, count)) => *count += 1,
            None => entries.push((byte, 1)),
        }
    }
    entries
}

/// Encode ASCII `text` into frame parts.
pub fn encode(text: &str) -> FrameParts {
    let entries = frequencies(text);
    let table = FrequencyTable::from_entries(
        entries
            .iter()
            .map(|&(s, c)| FrequencyEntry::new(s, c))
            .collect(),
    )
    .expect("test text must be ASCII");
    let tree = HuffmanTree::from_table(&table).expect("test text must be non-empty");

    let mut codes: Vec<Vec<bool>> = vec![Vec::new(); 128];
    for (symbol, path) in tree.code_table() {
        codes[symbol as usize] = path;
    }

    let mut bits = Vec::new();
    for &byte in text.as_bytes() {
        bits.extend_from_slice(&codes[byte as usize]);
    }

    FrameParts {
        entries,
        packed_bits: bits.len() as u32,
        payload: pack_bits(&bits),
        unpacked_bytes: text.len() as u32,
    }
}

/// Pack bits MSB-first, zero-padding the final byte.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            out[i / 8] |= 1 << (7 - i % 8);
        }
    }
    out
}

/// Parse a `"0101..."` string into bits.
pub fn bits(s: &str) -> Vec<bool> {
    s.chars().map(|c| c == '1').collect()
}
