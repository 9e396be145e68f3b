use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

use threadpool::ThreadPool;

pub use cli::CLIParser;
use document::{SymbolFilter, TextDocument};
use error::Error;
use frequency::FrequencyModel;
use huffman::HuffmanCoder;
use report::CodingReport;

mod cli;
pub mod document;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    baseline_bits: u32,
    symbol_filter: SymbolFilter,
    number_of_threads: usize,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

/// Runs the full pipeline for one document and renders its report.
pub fn analyze_document(
    path: &Path,
    symbol_filter: SymbolFilter,
    baseline_bits: u32,
) -> Result<String> {
    let input_file = open_input_file(path)?;
    let document = TextDocument::read(BufReader::new(input_file))
        .map_err(|e| Error::FailedToReadDocument(path.display().to_string(), e))?;
    log::info!(
        "Analyzing '{}': {} segments",
        path.display(),
        document.segments().len()
    );
    let model = FrequencyModel::from_symbols(document.symbols(symbol_filter))?;
    let coder = HuffmanCoder::new(&model)?;
    let report = CodingReport::new(&model, &coder, baseline_bits);
    let mut buffer = Vec::new();
    report.write(&mut buffer)?;
    Ok(String::from_utf8(buffer).expect("Report output must be valid UTF-8"))
}

/// Analyzes every input document and writes the reports in input order.
///
/// Each document's run is independent, so the runs are fanned out over a
/// thread pool and collected before anything is written.
pub fn analyze_documents(arguments: &Arguments) -> Result<()> {
    let reports = render_reports(arguments);
    write_reports(arguments, reports)
}

fn render_reports(arguments: &Arguments) -> BTreeMap<usize, (PathBuf, Result<String>)> {
    let pool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = channel();
    for (index, path) in arguments.input_files.iter().enumerate() {
        let sender = sender.clone();
        let path = path.clone();
        let symbol_filter = arguments.symbol_filter;
        let baseline_bits = arguments.baseline_bits;
        pool.execute(move || {
            let result = analyze_document(&path, symbol_filter, baseline_bits);
            sender
                .send((index, path, result))
                .expect("Report receiver must outlive the worker");
        });
    }
    drop(sender);

    let mut reports = BTreeMap::new();
    for (index, path, result) in receiver {
        reports.insert(index, (path, result));
    }
    reports
}

fn write_reports(
    arguments: &Arguments,
    reports: BTreeMap<usize, (PathBuf, Result<String>)>,
) -> Result<()> {
    let mut out: Box<dyn Write> = match &arguments.output_file {
        Some(path) => Box::new(BufWriter::new(open_output_file(path)?)),
        None => Box::new(io::stdout()),
    };
    let write_headings = arguments.input_files.len() > 1;
    let mut first_error = None;

    for (_, (path, result)) in reports {
        match result {
            Ok(report) => {
                if write_headings {
                    writeln!(out, "== {} ==", path.display())
                        .map_err(Error::FailedToWriteReport)?;
                }
                out.write_all(report.as_bytes())
                    .map_err(Error::FailedToWriteReport)?;
                if write_headings {
                    writeln!(out).map_err(Error::FailedToWriteReport)?;
                }
            }
            Err(error) => {
                log::error!("Analysis of '{}' failed: {}", path.display(), error);
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }
    out.flush().map_err(Error::FailedToWriteReport)?;

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
