//! Bit-level reading of the packed payload.
//!
//! Bits are consumed MSB-first within each byte, which is the order the
//! service packs its codes in.
//!
//! # Padding Rules
//! The payload is stored in whole bytes but only the first `bit_len` bits
//! are meaningful. `BitReader` never yields a bit at or beyond `bit_len`,
//! so trailing padding (including unused bits of the final byte) is never
//! interpreted.
//!
//! # Example
//! ```
//! use huffdec_core::bitio::BitReader;
//!
//! // 1011 followed by four padding bits
//! let data = [0b1011_0110];
//! let mut reader = BitReader::new(&data, 4);
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(false));
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), None);
//! ```

/// Reads bits MSB-first from a borrowed byte buffer.
///
/// # Invariants
/// - `bit_len <= data.len() * 8` (enforced by clamping in `new`)
/// - `bit_position <= bit_len`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Number of valid bits in `data`
    bit_len: usize,
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    ///
    /// A `bit_len` larger than the buffer is clamped to the buffer.
    pub fn new(data: &'a [u8], bit_len: usize) -> Self {
        Self {
            data,
            bit_len: bit_len.min(data.len() * 8),
            bit_position: 0,
        }
    }

    /// Read the next bit, or `None` once `bit_len` bits have been read.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }

        let byte = self.data[self.bit_position / 8];
        let shift = 7 - (self.bit_position % 8);
        self.bit_position += 1;

        Some((byte >> shift) & 1 == 1)
    }

    /// Return the number of valid bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bit_position
    }

    /// Return the current bit position.
    pub fn position(&self) -> usize {
        self.bit_position
    }

    /// Total number of valid bits.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Check if every valid bit has been read.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.bit_len
    }
}

/// Render the valid bits as a `0`/`1` string (for trace logging).
pub fn bit_string(data: &[u8], bit_len: usize) -> String {
    let mut reader = BitReader::new(data, bit_len);
    let mut out = String::with_capacity(reader.bit_len());
    while let Some(bit) = reader.read_bit() {
        out.push(if bit { '1' } else { '0' });
    }
    out
}
