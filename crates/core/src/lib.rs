//! huffdec-core: decoder for header-described Huffman payloads
//!
//! A remote service returns its response bodies packed with a Huffman code.
//! Each body carries a symbol frequency table followed by the packed bits;
//! the decoder rebuilds the code tree from the table alone and walks the
//! bits back into text.
//!
//! # Architecture
//!
//! - `framing`: header/body layout and bounds-checked parsing
//! - `table`: ordered symbol → count table
//! - `heap`: min-heap whose tie behavior matches the service's encoder
//! - `tree`: Huffman tree construction
//! - `bitio`: MSB-first bit reading bounded by the declared bit length
//! - `decoder`: the tree walk
//! - `validate`: optional count cross-check
//! - `codec`: public entry points
//! - `metrics`: per-call statistics
//!
//! # Design Principles
//!
//! - **No panics**: malformed input is reported as a structured error
//! - **Read-only**: the input buffer is borrowed, never mutated
//! - **Stateless**: each call builds and drops its own tree

pub mod bitio;
pub mod codec;
pub mod decoder;
pub mod error;
pub mod framing;
pub mod heap;
pub mod metrics;
pub mod table;
pub mod tree;
pub mod validate;

// Re-export commonly used types
pub use codec::{decode, decode_frame, decode_reader, decode_with, DecodeOptions, Unpacked};
pub use error::{DecodeError, Error, FormatError, Result, ValidationError};
pub use metrics::DecodeStats;
pub use table::{FrequencyEntry, FrequencyTable};
pub use tree::HuffmanTree;
