//! Huffman tree construction from a frequency table.
//!
//! Every entry becomes a leaf and is pushed into a [`MinHeap`] in header
//! order. The two lightest nodes are popped and merged (first pop on the
//! left, second on the right) until one node remains; that node is the
//! root. Walking left reads a `0` bit, walking right reads a `1`.
//!
//! The tree is built once per decode, owned top-down through `Box`, and
//! never mutated afterwards.

use std::fmt;

use crate::error::FormatError;
use crate::heap::{MinHeap, Weighted};
use crate::table::FrequencyTable;

/// A node of the tree: a symbol-carrying leaf or a two-child decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        /// Concatenated descendant symbols, left subtree first. Only used
        /// for diagnostics.
        label: String,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Merge two subtrees; `left` is the one popped first.
    pub fn merge(left: Node, right: Node) -> Self {
        let mut label = String::with_capacity(left.label().len() + right.label().len());
        label.push_str(left.label());
        label.push_str(right.label());

        Node::Internal {
            weight: left.weight() + right.weight(),
            label,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol for a leaf, or the concatenated label for an internal node.
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf { symbol, .. } => {
                std::str::from_utf8(std::slice::from_ref(symbol)).unwrap_or("?")
            }
            Node::Internal { label, .. } => label,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn collect_codes(&self, path: &mut Vec<bool>, out: &mut Vec<(u8, Vec<bool>)>) {
        match self {
            Node::Leaf { symbol, .. } => out.push((*symbol, path.clone())),
            Node::Internal { left, right, .. } => {
                path.push(false);
                left.collect_codes(path, out);
                path.pop();

                path.push(true);
                right.collect_codes(path, out);
                path.pop();
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize, edge: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf { symbol, weight } => writeln!(
                f,
                "{}{} -> leaf {:?} [weight: {}]",
                indent,
                edge,
                char::from(*symbol),
                weight
            ),
            Node::Internal {
                weight,
                label,
                left,
                right,
            } => {
                writeln!(f, "{}{} -> {:?} [weight: {}]", indent, edge, label, weight)?;
                left.fmt_indented(f, depth + 1, "0")?;
                right.fmt_indented(f, depth + 1, "1")
            }
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> u64 {
        Node::weight(self)
    }
}

/// Prefix-code tree for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// # Errors
    /// Returns `FormatError::NoSymbols` if the table is empty.
    pub fn from_table(table: &FrequencyTable) -> Result<Self, FormatError> {
        let mut heap = MinHeap::with_capacity(table.len());
        for entry in table.iter() {
            heap.push(Node::leaf(entry.symbol, entry.count as u64));
        }

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Node::merge(left, right));
        }

        let root = heap.pop().ok_or(FormatError::NoSymbols)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the table had one symbol and the root is itself a leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Length of the longest code in bits.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Bit path for every symbol, left subtree first (`false` = 0).
    ///
    /// A single-leaf tree yields one entry with an empty path.
    pub fn code_table(&self) -> Vec<(u8, Vec<bool>)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.root.collect_codes(&mut Vec::new(), &mut out);
        out
    }

    /// Indented dump of the tree structure.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0, "root")
    }
}
