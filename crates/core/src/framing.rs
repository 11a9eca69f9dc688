//! Frame parsing: frequency-table header followed by the packed body.
//!
//! # Frame Format
//!
//! All integers are `u32` little-endian.
//!
//! ```text
//! +----------------------+
//! | total_file_length    |  informational only
//! +----------------------+
//! | reserved             |  always 0, ignored
//! +----------------------+
//! | symbol_count         |  number of entries that follow
//! +----------------------+
//! | count  (4)           |  \
//! | symbol (1)           |   } repeated symbol_count times
//! | padding (3)          |  /
//! +----------------------+
//! | packed_bits          |  meaningful bits in the payload
//! +----------------------+
//! | packed_bytes         |  payload length in bytes
//! +----------------------+
//! | unpacked_bytes       |  informational decoded length
//! +----------------------+
//! | payload              |  packed_bytes bytes, codes MSB-first
//! +----------------------+
//! ```
//!
//! Every length is checked against the bytes actually available before
//! anything is read, so a lying header can neither over-read nor trigger a
//! large allocation.

use crate::error::{FormatError, Result};
use crate::table::{FrequencyEntry, FrequencyTable};

/// Size of the three fixed header fields
const HEADER_SIZE: usize = 12;

/// Size of one `(count, symbol, padding)` entry
const ENTRY_SIZE: usize = 8;

/// Size of the three fixed body fields
const BODY_HEADER_SIZE: usize = 12;

/// A parsed frame. The payload borrows from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Length the sender claims for the whole frame (not used for decoding)
    pub total_file_length: u32,

    /// Symbol frequencies in header order
    pub table: FrequencyTable,

    /// Number of meaningful bits in `payload`
    pub packed_bits: u32,

    /// Declared payload size in bytes
    pub packed_bytes: u32,

    /// Declared decoded size (not authoritative)
    pub unpacked_bytes: u32,

    /// Packed codes, exactly `packed_bytes` long
    pub payload: &'a [u8],

    /// Length of the buffer the frame was parsed from, trailing bytes included
    pub input_len: usize,
}

/// Parse a frame from bytes.
///
/// # Errors
/// - `FormatError::Truncated` if any section extends past the input
/// - `FormatError::NonAsciiSymbol` / `DuplicateSymbol` for a bad table
/// - `FormatError::PackedBitsExceedPayload` if the bit length cannot fit
pub fn parse_frame(bytes: &[u8]) -> Result<Frame<'_>> {
    let mut cursor = ByteCursor::new(bytes);

    cursor.require(HEADER_SIZE, "header")?;
    let total_file_length = cursor.read_u32()?;
    let _reserved = cursor.read_u32()?;
    let symbol_count = cursor.read_u32()? as usize;

    cursor.require(symbol_count.saturating_mul(ENTRY_SIZE), "symbol table")?;
    let mut entries = Vec::with_capacity(symbol_count);
    for _ in 0..symbol_count {
        let count = cursor.read_u32()?;
        let symbol = cursor.take(4, "symbol table")?[0];
        entries.push(FrequencyEntry::new(symbol, count));
    }
    let table = FrequencyTable::from_entries(entries)?;

    cursor.require(BODY_HEADER_SIZE, "body header")?;
    let packed_bits = cursor.read_u32()?;
    let packed_bytes = cursor.read_u32()?;
    let unpacked_bytes = cursor.read_u32()?;

    if packed_bits as u64 > packed_bytes as u64 * 8 {
        return Err(FormatError::PackedBitsExceedPayload {
            packed_bits,
            packed_bytes,
        }
        .into());
    }

    let payload = cursor.take(packed_bytes as usize, "payload")?;

    if cursor.remaining() > 0 {
        log::debug!("ignoring {} trailing bytes after payload", cursor.remaining());
    }

    log::debug!(
        "parsed frame: {} symbols, {} bits in {} bytes, {} bytes declared unpacked",
        table.len(),
        packed_bits,
        packed_bytes,
        unpacked_bytes
    );

    Ok(Frame {
        total_file_length,
        table,
        packed_bits,
        packed_bytes,
        unpacked_bytes,
        payload,
        input_len: bytes.len(),
    })
}

/// Bounds-checked forward reader over a byte slice.
struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn require(&self, len: usize, section: &'static str) -> std::result::Result<(), FormatError> {
        if len > self.remaining() {
            return Err(FormatError::Truncated {
                section,
                required: len,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn take(&mut self, len: usize, section: &'static str) -> std::result::Result<&'a [u8], FormatError> {
        self.require(len, section)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_u32(&mut self) -> std::result::Result<u32, FormatError> {
        let bytes = self.take(4, "integer field")?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

/// Serialize a frame for unit tests.
#[cfg(test)]
pub(crate) fn test_frame_bytes(
    entries: &[(u8, u32)],
    packed_bits: u32,
    payload: &[u8],
    unpacked_bytes: u32,
) -> Vec<u8> {
    let total = HEADER_SIZE + entries.len() * ENTRY_SIZE + BODY_HEADER_SIZE + payload.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    for &(symbol, count) in entries {
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&[symbol, 0, 0, 0]);
    }
    out.extend_from_slice(&packed_bits.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&unpacked_bytes.to_le_bytes());
    out.extend_from_slice(payload);
    out
}
