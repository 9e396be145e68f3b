pub mod coder;
pub mod codeword;
pub mod tree;

pub use coder::{Codebook, CodebookEntry, HuffmanCoder};
pub use codeword::Codeword;
pub use tree::HuffmanTree;

/// Atomic unit of the coded alphabet.
pub type Symbol = char;
