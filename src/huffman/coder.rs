use super::codeword::Codeword;
use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;
use crate::error::Error;
use crate::frequency::FrequencyModel;
use crate::Result;

#[derive(Clone, Copy)]
pub struct CodebookEntry {
    pub symbol: Symbol,
    pub codeword: Codeword,
}

/// Read-only symbol-to-codeword mapping.
///
/// Entries are sorted by symbol so lookups can binary search, the same way
/// the codewords are reported.
pub struct Codebook {
    entries: Vec<CodebookEntry>,
}

impl Codebook {
    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.entries
            .binary_search_by(|probe| probe.symbol.cmp(&symbol))
            .ok()
            .map(|position| &self.entries[position].codeword)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodebookEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fill_codebook(
    entries: &mut Vec<(CodebookEntry, u64)>,
    node: Node,
    tree: &HuffmanTree,
    current_pattern: Codeword,
) {
    match node.kind {
        NodeKind::Leaf { symbol } => {
            entries.push((
                CodebookEntry {
                    symbol,
                    codeword: current_pattern,
                },
                node.weight,
            ));
        }
        NodeKind::Inner { zero, one } => {
            fill_codebook(entries, tree.node(zero), tree, current_pattern.push(false));
            fill_codebook(entries, tree.node(one), tree, current_pattern.push(true));
        }
    }
}

/// Minimum-expected-length binary prefix code for a frequency model.
///
/// Codewords are derived once, by a single traversal of the finished merge
/// tree; the tree is the single source of truth for the code. A one-symbol
/// alphabet gets the codeword `0` by convention, since a lone leaf is not a
/// valid root of a binary code tree.
pub struct HuffmanCoder {
    tree: HuffmanTree,
    codebook: Codebook,
    total_encoded_bits: u64,
}

impl HuffmanCoder {
    pub fn new(model: &FrequencyModel) -> Result<HuffmanCoder> {
        let symbols_and_weights: Vec<(Symbol, u64)> = model.symbols().collect();
        let tree = HuffmanTree::new(&symbols_and_weights)?;

        let mut weighted_entries = Vec::with_capacity(tree.leaf_count());
        let root = tree.root();
        match root.kind {
            NodeKind::Leaf { symbol } => {
                weighted_entries.push((
                    CodebookEntry {
                        symbol,
                        codeword: Codeword::new().push(false),
                    },
                    root.weight,
                ));
            }
            NodeKind::Inner { .. } => {
                fill_codebook(&mut weighted_entries, root, &tree, Codeword::new());
            }
        }

        let total_encoded_bits = weighted_entries
            .iter()
            .map(|(entry, weight)| weight * entry.codeword.len() as u64)
            .sum();
        let mut entries: Vec<CodebookEntry> = weighted_entries
            .into_iter()
            .map(|(entry, _)| entry)
            .collect();
        entries.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        Ok(HuffmanCoder {
            tree,
            codebook: Codebook { entries },
            total_encoded_bits,
        })
    }

    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }

    pub fn code_for(&self, symbol: Symbol) -> Result<&Codeword> {
        self.codebook
            .get(symbol)
            .ok_or(Error::UnknownSymbol(symbol))
    }

    /// Number of symbols in the stream the underlying model was built from.
    pub fn total_symbol_count(&self) -> u64 {
        self.tree.total_weight()
    }

    /// Average codeword length in bits per symbol, weighted by probability.
    pub fn expected_bits_per_symbol(&self) -> f64 {
        self.total_encoded_bits as f64 / self.tree.total_weight() as f64
    }

    /// Exact number of bits needed to encode the original stream with this
    /// code, without padding or framing.
    pub fn total_encoded_bits(&self) -> u64 {
        self.total_encoded_bits
    }

    /// Size of the Huffman encoding relative to a fixed-width encoding, in
    /// percent.
    pub fn compression_ratio(&self, fixed_width_bits: u32) -> Result<f64> {
        if fixed_width_bits == 0 {
            return Err(Error::InvalidWidth(fixed_width_bits));
        }
        let baseline_bits = self.tree.total_weight() * fixed_width_bits as u64;
        Ok(self.total_encoded_bits as f64 / baseline_bits as f64 * 100.0)
    }

    /// Encodes a symbol sequence to its bit sequence.
    pub fn encode<I>(&self, symbols: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut bits = Vec::new();
        for symbol in symbols {
            let codeword = self.code_for(symbol)?;
            bits.extend(codeword.bits());
        }
        Ok(bits)
    }

    /// Decodes a bit sequence by walking the tree from the root on each bit.
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<Symbol>> {
        let root = self.tree.root();
        if let NodeKind::Leaf { symbol } = root.kind {
            // degenerate one-symbol code, every codeword is a single 0 bit
            return bits
                .iter()
                .map(|&bit| {
                    if bit {
                        Err(Error::MalformedBitSequence)
                    } else {
                        Ok(symbol)
                    }
                })
                .collect();
        }

        let mut symbols = Vec::new();
        let mut node = root;
        for &bit in bits {
            if let NodeKind::Inner { zero, one } = node.kind {
                node = self.tree.node(if bit { one } else { zero });
            }
            if let NodeKind::Leaf { symbol } = node.kind {
                symbols.push(symbol);
                node = root;
            }
        }
        if node.index != root.index {
            return Err(Error::MalformedBitSequence);
        }
        Ok(symbols)
    }
}
