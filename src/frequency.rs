use std::collections::BTreeMap;

use crate::error::Error;
use crate::huffman::Symbol;
use crate::Result;

/// Occurrence counts, probabilities and Shannon entropy for a symbol stream.
///
/// The model is built once from an already filtered stream and is immutable
/// afterwards. Symbols that never occur are absent from the model, so every
/// stored count is at least one. Iteration order is ascending by symbol.
pub struct FrequencyModel {
    counts: BTreeMap<Symbol, u64>,
    total: u64,
}

impl FrequencyModel {
    pub fn from_symbols<I>(symbols: I) -> Result<FrequencyModel>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut counts: BTreeMap<Symbol, u64> = BTreeMap::new();
        let mut total = 0;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }
        if total == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(FrequencyModel { counts, total })
    }

    /// Number of symbols in the stream the model was built from.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn alphabet_len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, symbol: Symbol) -> Result<u64> {
        self.counts
            .get(&symbol)
            .copied()
            .ok_or(Error::UnknownSymbol(symbol))
    }

    pub fn probability(&self, symbol: Symbol) -> Result<f64> {
        let count = self.count(symbol)?;
        Ok(count as f64 / self.total as f64)
    }

    /// Iterates over `(symbol, count)` pairs in ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy in bits per symbol.
    ///
    /// Every present symbol has a count of at least one, so no probability is
    /// ever zero and the sum is well defined. A one-symbol alphabet yields
    /// exactly 0.0.
    pub fn entropy(&self) -> f64 {
        self.counts
            .values()
            .map(|&count| {
                let probability = count as f64 / self.total as f64;
                probability * (1.0 / probability).log2()
            })
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyModel;
    use crate::error::Error;

    #[test]
    fn test_empty_stream_is_rejected() {
        let result = FrequencyModel::from_symbols(std::iter::empty());
        assert!(
            matches!(result, Err(Error::EmptyInput)),
            "Empty stream must fail with EmptyInput"
        );
    }

    #[test]
    fn test_counts_and_total() {
        let model = FrequencyModel::from_symbols("abacabad".chars()).unwrap();
        assert_eq!(model.total_count(), 8, "Total count does not match");
        assert_eq!(model.alphabet_len(), 4, "Alphabet size does not match");
        assert_eq!(model.count('a').unwrap(), 4);
        assert_eq!(model.count('b').unwrap(), 2);
        assert_eq!(model.count('c').unwrap(), 1);
        assert_eq!(model.count('d').unwrap(), 1);
    }

    #[test]
    fn test_probability_of_unknown_symbol() {
        let model = FrequencyModel::from_symbols("aa".chars()).unwrap();
        let result = model.probability('z');
        assert!(
            matches!(result, Err(Error::UnknownSymbol('z'))),
            "Probability lookup of an absent symbol must fail with UnknownSymbol"
        );
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = FrequencyModel::from_symbols("mississippi".chars()).unwrap();
        let sum: f64 = model
            .symbols()
            .map(|(symbol, _)| model.probability(symbol).unwrap())
            .sum();
        assert!(
            (sum - 1.0).abs() < 1e-12,
            "Probabilities must sum to 1.0, got {}",
            sum
        );
    }

    #[test]
    fn test_entropy_of_single_symbol_alphabet_is_zero() {
        let model = FrequencyModel::from_symbols("aaaa".chars()).unwrap();
        assert_eq!(
            model.entropy(),
            0.0,
            "A one-symbol alphabet has zero entropy"
        );
    }

    #[test]
    fn test_entropy_of_uniform_alphabet() {
        let model = FrequencyModel::from_symbols("abcd".chars()).unwrap();
        assert!(
            (model.entropy() - 2.0).abs() < 1e-12,
            "Four equally likely symbols carry exactly two bits each"
        );
    }

    #[test]
    fn test_entropy_of_skewed_alphabet() {
        // a:5, b:2, c:1, d:1 over 9 symbols
        let model = FrequencyModel::from_symbols("aaaaabbcd".chars()).unwrap();
        let entropy = model.entropy();
        assert!(
            (entropy - 1.657743).abs() < 1e-4,
            "Entropy {} does not match the expected 1.6577 bits",
            entropy
        );
    }

    #[test]
    fn test_symbols_are_iterated_in_ascending_order() {
        let model = FrequencyModel::from_symbols("dcba".chars()).unwrap();
        let symbols: Vec<char> = model.symbols().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c', 'd']);
    }
}
