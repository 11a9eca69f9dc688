//! Entry points: bytes (or a reader) in, decoded text out.
//!
//! Each call parses the frame, builds a fresh tree, walks the payload and
//! optionally cross-checks symbol counts. [`decode_frame`] skips the first
//! two steps for callers that already hold a parsed frame and its tree. Nothing is cached between calls,
//! so concurrent calls on different inputs need no coordination.

use std::io::Read;
use std::time::Instant;

use crate::bitio::bit_string;
use crate::decoder::decode_payload;
use crate::error::Result;
use crate::framing::{parse_frame, Frame};
use crate::metrics::DecodeStats;
use crate::tree::HuffmanTree;
use crate::validate::validate_counts;

/// Default bound on single-symbol output (256 MiB)
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 256 * 1024 * 1024;

/// Knobs for [`decode_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Cross-check decoded counts against the header
    pub validate: bool,

    /// Upper bound on output that is not backed by payload bits
    pub max_output_bytes: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn max_output_bytes(mut self, limit: usize) -> Self {
        self.max_output_bytes = limit;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            validate: false,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Decoded text plus the statistics of the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unpacked {
    pub text: String,
    pub stats: DecodeStats,
}

/// Decode a complete frame without the validation pass.
///
/// # Example
/// ```
/// // Table {A: 2, B: 1, C: 1}; "ABAC" packs to 010011 (6 bits)
/// let mut frame = Vec::new();
/// for field in [0u32, 0, 3] {
///     frame.extend_from_slice(&field.to_le_bytes());
/// }
/// for (symbol, count) in [(b'A', 2u32), (b'B', 1), (b'C', 1)] {
///     frame.extend_from_slice(&count.to_le_bytes());
///     frame.extend_from_slice(&[symbol, 0, 0, 0]);
/// }
/// for field in [6u32, 1, 4] {
///     frame.extend_from_slice(&field.to_le_bytes());
/// }
/// frame.push(0b0100_1100);
///
/// assert_eq!(huffdec_core::decode(&frame).unwrap(), "ABAC");
/// ```
pub fn decode(bytes: &[u8]) -> Result<String> {
    decode_with(bytes, &DecodeOptions::default()).map(|unpacked| unpacked.text)
}

/// Read `reader` to its end and decode the bytes as one frame.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Decode a frame with explicit options, returning text and statistics.
///
/// # Errors
/// - `Error::Format` for structurally invalid input
/// - `Error::Decode` if the payload bits do not walk cleanly
/// - `Error::Validation` if `options.validate` is set and counts disagree
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Unpacked> {
    let start = Instant::now();

    let frame = parse_frame(bytes)?;
    let tree = HuffmanTree::from_table(&frame.table)?;
    decode_prepared(&frame, &tree, options, start)
}

/// Decode an already parsed frame against its tree.
///
/// For callers that need the frame or tree themselves (for example to
/// print the tree) without parsing and building twice. `tree` must come
/// from `frame.table`.
pub fn decode_frame(
    frame: &Frame<'_>,
    tree: &HuffmanTree,
    options: &DecodeOptions,
) -> Result<Unpacked> {
    decode_prepared(frame, tree, options, Instant::now())
}

fn decode_prepared(
    frame: &Frame<'_>,
    tree: &HuffmanTree,
    options: &DecodeOptions,
    start: Instant,
) -> Result<Unpacked> {
    log::debug!(
        "built tree: {} leaves, depth {}",
        tree.leaf_count(),
        tree.depth()
    );

    let packed_bits = frame.packed_bits as usize;
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("payload bits: {}", bit_string(frame.payload, packed_bits));
    }

    let decoded = decode_payload(tree, frame.payload, packed_bits, options.max_output_bytes)?;

    if options.validate {
        validate_counts(&frame.table, &decoded.text)?;
    }

    let stats = DecodeStats {
        input_bytes: frame.input_len,
        symbol_count: frame.table.len(),
        packed_bits,
        packed_bytes: frame.packed_bytes as usize,
        declared_unpacked_bytes: frame.unpacked_bytes as usize,
        tree_depth: tree.depth(),
        bits_consumed: decoded.bits_consumed,
        symbols_emitted: decoded.text.len(),
        validated: options.validate,
        elapsed: start.elapsed(),
    };

    if !stats.matches_declared_length() {
        log::warn!(
            "decoded {} bytes but header declares {}",
            stats.symbols_emitted,
            stats.declared_unpacked_bytes
        );
    }

    Ok(Unpacked {
        text: decoded.text,
        stats,
    })
}
