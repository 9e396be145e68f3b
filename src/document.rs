use std::io::BufRead;

use clap::{builder::PossibleValue, ValueEnum};

use crate::huffman::Symbol;

/// Punctuation the original report counts alongside letters, space included.
const COUNTABLE_PUNCTUATION: &str = ":,.;?!'\"-\u{2014} ";

/// Policy deciding which characters of a document count as symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolFilter {
    Letters,
    LettersAndPunctuation,
    All,
}

impl ValueEnum for SymbolFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Letters, Self::LettersAndPunctuation, Self::All]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Letters => Some(PossibleValue::new("letters")),
            Self::LettersAndPunctuation => Some(PossibleValue::new("letters-and-punctuation")),
            Self::All => Some(PossibleValue::new("all")),
        }
    }
}

impl SymbolFilter {
    pub fn is_countable(&self, symbol: Symbol) -> bool {
        match self {
            Self::Letters => symbol.is_alphabetic(),
            Self::LettersAndPunctuation => {
                symbol.is_alphabetic() || COUNTABLE_PUNCTUATION.contains(symbol)
            }
            Self::All => true,
        }
    }
}

/// A document reduced to its text segments.
///
/// Each segment is one paragraph, trimmed and lowercased. Line breaks never
/// reach the symbol stream; whether the space between words counts is up to
/// the symbol filter.
pub struct TextDocument {
    segments: Vec<String>,
}

impl TextDocument {
    pub fn read<R: BufRead>(reader: R) -> std::io::Result<TextDocument> {
        let mut segments = Vec::new();
        for line in reader.lines() {
            let line = line?;
            segments.push(line.trim().to_lowercase());
        }
        Ok(TextDocument { segments })
    }

    pub fn from_text(text: &str) -> TextDocument {
        TextDocument {
            segments: text
                .lines()
                .map(|line| line.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Streams the countable characters of every segment in document order.
    pub fn symbols(&self, filter: SymbolFilter) -> impl Iterator<Item = Symbol> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| segment.chars())
            .filter(move |&symbol| filter.is_countable(symbol))
    }
}
