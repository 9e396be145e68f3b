use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::Symbol;
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { zero: usize, one: usize },
}

/// Arena node of the merge tree. `index` is the position in the arena and
/// doubles as the tie-break key: among equal weights the node created first
/// wins, so the merge order is fully deterministic.
#[derive(Clone, Copy)]
pub(super) struct Node {
    pub(super) weight: u64,
    pub(super) index: usize,
    pub(super) kind: NodeKind,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.index == other.index
    }
}

impl Eq for Node {}

/// Huffman merge tree over a weighted alphabet, stored arena-style.
///
/// Leaves are seeded in the order the `(symbol, weight)` pairs are given and
/// merged bottom-up: the two lightest nodes are extracted, the first becomes
/// the 0-branch and the second the 1-branch of a fresh inner node. Ties are
/// broken by creation order (leaves before inner nodes, earlier leaves
/// first), which fixes the exact codewords without affecting their lengths.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    pub fn new(symbols_and_weights: &[(Symbol, u64)]) -> Result<HuffmanTree> {
        if symbols_and_weights.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node> = vec![];

        for &(symbol, weight) in symbols_and_weights.iter() {
            let node = Node {
                weight,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let leaf_count = nodes.len();

        // n - 1 merges leave exactly the root on the heap
        while heap.len() > 1 {
            let zero = heap.pop().unwrap().0;
            let one = heap.pop().unwrap().0;
            let node = Node {
                weight: zero.weight + one.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    zero: zero.index,
                    one: one.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let root_index = heap.pop().unwrap().0.index;

        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub(super) fn root(&self) -> Node {
        self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Number of distinct symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Total weight of the alphabet, i.e. the root weight.
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root_index].weight
    }
}
