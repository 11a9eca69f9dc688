//! Tree walk over the packed payload bits.
//!
//! Each symbol starts at the root. One bit is read per step (`0` = left,
//! `1` = right) until a leaf is reached, the leaf's symbol is emitted and
//! the walk restarts at the root. Decoding stops only when every valid bit
//! has been consumed while positioned at the root.

use crate::bitio::BitReader;
use crate::error::{DecodeError, FormatError, Result};
use crate::tree::{HuffmanTree, Node};

/// Output of a successful walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Emitted symbols in order
    pub text: String,
    /// Bits consumed; equals `packed_bits` unless the tree is a single leaf
    pub bits_consumed: usize,
}

/// Decode the first `packed_bits` bits of `payload` against `tree`.
/// A `packed_bits` past the end of `payload` is clamped to the payload.
///
/// A single-leaf tree has no decision nodes, so no bits are read: the
/// symbol is emitted as many times as its declared count. `max_output`
/// bounds that repetition.
///
/// # Errors
/// - `DecodeError::OutOfBounds` if the bits end in the middle of a code
/// - `DecodeError::DeadEnd` if a bit selects a missing child
/// - `FormatError::OutputTooLarge` if a single-leaf count exceeds `max_output`
pub fn decode_payload(
    tree: &HuffmanTree,
    payload: &[u8],
    packed_bits: usize,
    max_output: usize,
) -> Result<Decoded> {
    if let Node::Leaf { symbol, weight } = tree.root() {
        return repeat_single(*symbol, *weight, max_output);
    }

    let mut reader = BitReader::new(payload, packed_bits);
    let mut text = String::new();

    while !reader.is_empty() {
        let symbol = next_symbol(tree, &mut reader, text.len())?;
        text.push(char::from(symbol));
    }

    Ok(Decoded {
        text,
        bits_consumed: reader.position(),
    })
}

fn repeat_single(symbol: u8, count: u64, max_output: usize) -> Result<Decoded> {
    if count > max_output as u64 {
        return Err(FormatError::OutputTooLarge {
            declared: count,
            limit: max_output,
        }
        .into());
    }

    let text = std::iter::repeat(char::from(symbol))
        .take(count as usize)
        .collect();

    Ok(Decoded {
        text,
        bits_consumed: 0,
    })
}

/// Walk from the root to a leaf, returning its symbol.
fn next_symbol(tree: &HuffmanTree, reader: &mut BitReader<'_>, decoded: usize) -> Result<u8> {
    let mut node = tree.root();

    loop {
        let bit = reader.read_bit().ok_or(DecodeError::OutOfBounds {
            position: reader.position(),
            packed_bits: reader.bit_len(),
            decoded,
        })?;

        node = step(node, bit).ok_or(DecodeError::DeadEnd {
            position: reader.position() - 1,
            decoded,
        })?;

        if let Node::Leaf { symbol, .. } = node {
            return Ok(*symbol);
        }
    }
}

/// Child selected by `bit`, or `None` if `node` has no children.
fn step(node: &Node, bit: bool) -> Option<&Node> {
    match node {
        Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        Node::Leaf { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::table::{FrequencyEntry, FrequencyTable};

    const LIMIT: usize = 1 << 20;

    fn abc_tree() -> HuffmanTree {
        let table = FrequencyTable::from_entries(vec![
            FrequencyEntry::new(b'A', 2),
            FrequencyEntry::new(b'B', 1),
            FrequencyEntry::new(b'C', 1),
        ])
        .unwrap();
        HuffmanTree::from_table(&table).unwrap()
    }

    #[test]
    fn test_decode_abac() {
        // A=0 B=10 C=11, "ABAC" = 010011 + two padding bits
        let decoded = decode_payload(&abc_tree(), &[0b0100_1100], 6, LIMIT).unwrap();
        assert_eq!(decoded.text, "ABAC");
        assert_eq!(decoded.bits_consumed, 6);
    }

    #[test]
    fn test_padding_bits_are_ignored() {
        // Same codes with the padding bits set: would decode as extra C's
        let decoded = decode_payload(&abc_tree(), &[0b0100_1111], 6, LIMIT).unwrap();
        assert_eq!(decoded.text, "ABAC");
    }

    #[test]
    fn test_zero_bits_decode_to_empty() {
        let decoded = decode_payload(&abc_tree(), &[], 0, LIMIT).unwrap();
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.bits_consumed, 0);
    }

    #[test]
    fn test_bit_count_past_payload_stops_at_payload_end() {
        let decoded = decode_payload(&abc_tree(), &[0b0100_1100], 40, LIMIT).unwrap();
        assert_eq!(decoded.text, "ABACAA");
        assert_eq!(decoded.bits_consumed, 8);
    }

    #[test]
    fn test_ends_mid_code() {
        // "AB" then a lone 1: the walk is inside the BC node when bits run out
        let result = decode_payload(&abc_tree(), &[0b0101_0000], 4, LIMIT);
        match result {
            Err(Error::Decode(DecodeError::OutOfBounds {
                position,
                packed_bits,
                decoded,
            })) => {
                assert_eq!(position, 4);
                assert_eq!(packed_bits, 4);
                assert_eq!(decoded, 2);
            }
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }

    #[test]
    fn test_single_leaf_repeats_count() {
        let table = FrequencyTable::from_entries(vec![FrequencyEntry::new(b'7', 5)]).unwrap();
        let tree = HuffmanTree::from_table(&table).unwrap();

        // Payload content is irrelevant for a single-leaf tree
        let decoded = decode_payload(&tree, &[0xFF], 8, LIMIT).unwrap();
        assert_eq!(decoded.text, "77777");
        assert_eq!(decoded.bits_consumed, 0);
    }

    #[test]
    fn test_single_leaf_respects_limit() {
        let table =
            FrequencyTable::from_entries(vec![FrequencyEntry::new(b'x', u32::MAX)]).unwrap();
        let tree = HuffmanTree::from_table(&table).unwrap();

        let result = decode_payload(&tree, &[], 0, 16);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::OutputTooLarge { limit: 16, .. }))
        ));
    }

    #[test]
    fn test_step_from_leaf_is_dead_end() {
        let leaf = Node::leaf(b'a', 1);
        assert!(step(&leaf, false).is_none());
        assert!(step(&leaf, true).is_none());
    }

    #[test]
    fn test_step_selects_child() {
        let tree = abc_tree();
        let left = step(tree.root(), false).unwrap();
        let right = step(tree.root(), true).unwrap();
        assert_eq!(left.label(), "A");
        assert_eq!(right.label(), "BC");
    }
}
