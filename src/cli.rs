use crate::document::SymbolFilter;
use crate::Arguments;
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_baseline_bits_argument(command);
        let command = Self::register_symbol_filter_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_baseline_bits_argument(command: Command) -> Command {
        command.arg(Self::create_baseline_bits_argument())
    }

    fn register_symbol_filter_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_filter_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Path to one or more text documents to analyze")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <FILE> "Write the report to a file instead of stdout")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_baseline_bits_argument() -> Arg {
        arg!(baseline_bits: -b --baseline_bits <BITS> "Fixed-width baseline in bits per symbol")
            .default_value("8")
            .value_parser([
                PossibleValue::new("7"),
                PossibleValue::new("8"),
                PossibleValue::new("16"),
                PossibleValue::new("32"),
            ])
    }

    fn create_symbol_filter_argument() -> Arg {
        arg!(symbol_filter: -f --symbol_filter <FILTER> "Which characters count as symbols")
            .default_value("letters-and-punctuation")
            .value_parser(value_parser!(SymbolFilter))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            baseline_bits: Self::extract_baseline_bits_argument(matches),
            symbol_filter: Self::extract_symbol_filter_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_file").cloned()
    }

    fn extract_baseline_bits_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<String>("baseline_bits")
            .expect("Baseline bits must be provided, but was unset.")
            .parse::<u32>()
            .expect("Argument value for baseline bits must be in range of u32")
    }

    fn extract_symbol_filter_argument(matches: &ArgMatches) -> SymbolFilter {
        matches
            .get_one::<SymbolFilter>("symbol_filter")
            .expect("Symbol filter must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
