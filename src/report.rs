use std::io::Write;

use crate::error::Error;
use crate::frequency::FrequencyModel;
use crate::huffman::{Codeword, HuffmanCoder, Symbol};
use crate::Result;

/// Tabular coding report for one document.
///
/// One row per distinct symbol in lexicographic order, followed by the
/// scalar summary: entropy, fixed-width baseline, average codeword length,
/// total Huffman bits and the compression percentage.
pub struct CodingReport<'a> {
    model: &'a FrequencyModel,
    coder: &'a HuffmanCoder,
    baseline_bits: u32,
}

impl<'a> CodingReport<'a> {
    pub fn new(
        model: &'a FrequencyModel,
        coder: &'a HuffmanCoder,
        baseline_bits: u32,
    ) -> CodingReport<'a> {
        CodingReport {
            model,
            coder,
            baseline_bits,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        let compression_ratio = self.coder.compression_ratio(self.baseline_bits)?;
        let mut rows = Vec::with_capacity(self.model.alphabet_len());
        for (symbol, count) in self.model.symbols() {
            let codeword = *self.coder.code_for(symbol)?;
            rows.push((symbol, count, codeword));
        }
        self.write_formatted(out, &rows, compression_ratio)
            .map_err(Error::FailedToWriteReport)
    }

    fn write_formatted<W: Write>(
        &self,
        out: &mut W,
        rows: &[(Symbol, u64, Codeword)],
        compression_ratio: f64,
    ) -> std::io::Result<()> {
        let total = self.model.total_count();
        writeln!(out, "Total number of characters: {}", total)?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<8}{:>10}{:>13}  {:<16}{:>6}",
            "Symbol", "Frequency", "Probability", "Codeword", "Length"
        )?;
        for &(symbol, count, codeword) in rows {
            let probability = count as f64 / total as f64;
            writeln!(
                out,
                "{:<8}{:>10}{:>13.6}  {:<16}{:>6}",
                format!("{:?}", symbol),
                count,
                probability,
                codeword.to_string(),
                codeword.len()
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Entropy: {:.6} bits/symbol", self.model.entropy())?;
        writeln!(
            out,
            "Fixed-width baseline ({} bits/symbol): {} bits",
            self.baseline_bits,
            total * self.baseline_bits as u64
        )?;
        writeln!(
            out,
            "Average codeword length: {:.6} bits/symbol",
            self.coder.expected_bits_per_symbol()
        )?;
        writeln!(
            out,
            "Total Huffman bits: {} bits",
            self.coder.total_encoded_bits()
        )?;
        writeln!(out, "Compression ratio: {:.6} %", compression_ratio)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::CodingReport;
    use crate::frequency::FrequencyModel;
    use crate::huffman::HuffmanCoder;

    fn render(text: &str, baseline_bits: u32) -> String {
        let model = FrequencyModel::from_symbols(text.chars()).unwrap();
        let coder = HuffmanCoder::new(&model).unwrap();
        let report = CodingReport::new(&model, &coder, baseline_bits);
        let mut buffer = Vec::new();
        report.write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_contains_one_row_per_symbol() {
        let output = render("aaaaabbcd", 8);
        assert!(output.contains("'a'"), "Row for 'a' is missing:\n{}", output);
        assert!(output.contains("'b'"), "Row for 'b' is missing:\n{}", output);
        assert!(output.contains("'c'"), "Row for 'c' is missing:\n{}", output);
        assert!(output.contains("'d'"), "Row for 'd' is missing:\n{}", output);
    }

    #[test]
    fn test_report_scalars() {
        let output = render("aaaaabbcd", 8);
        assert!(
            output.contains("Total number of characters: 9"),
            "Unexpected total in:\n{}",
            output
        );
        assert!(
            output.contains("Entropy: 1.657743 bits/symbol"),
            "Unexpected entropy in:\n{}",
            output
        );
        assert!(
            output.contains("Fixed-width baseline (8 bits/symbol): 72 bits"),
            "Unexpected baseline in:\n{}",
            output
        );
        assert!(
            output.contains("Total Huffman bits: 15 bits"),
            "Unexpected bit total in:\n{}",
            output
        );
        assert!(
            output.contains("Compression ratio: 20.833333 %"),
            "Unexpected ratio in:\n{}",
            output
        );
    }

    #[test]
    fn test_rows_are_sorted_by_symbol() {
        let output = render("dcba", 8);
        let a = output.find("'a'").unwrap();
        let b = output.find("'b'").unwrap();
        let c = output.find("'c'").unwrap();
        let d = output.find("'d'").unwrap();
        assert!(a < b && b < c && c < d, "Rows out of order:\n{}", output);
    }

    #[test]
    fn test_zero_width_baseline_fails() {
        let model = FrequencyModel::from_symbols("ab".chars()).unwrap();
        let coder = HuffmanCoder::new(&model).unwrap();
        let report = CodingReport::new(&model, &coder, 0);
        let mut buffer = Vec::new();
        assert!(report.write(&mut buffer).is_err());
    }
}
