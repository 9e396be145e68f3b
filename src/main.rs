use std::env::args_os;
use std::process::ExitCode;

use huffman_doc_analyzer::{analyze_documents, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match analyze_documents(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Analysis failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
