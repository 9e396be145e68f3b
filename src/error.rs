use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    EmptyAlphabet,
    UnknownSymbol(char),
    InvalidWidth(u32),
    MalformedBitSequence,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadDocument(String, std::io::Error),
    FailedToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(
                    f,
                    "Frequency model cannot be built from an empty symbol stream"
                )
            }
            Self::EmptyAlphabet => {
                write!(f, "Huffman code cannot be built for an empty alphabet")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {:?} is not part of the trained alphabet", symbol)
            }
            Self::InvalidWidth(width) => {
                write!(
                    f,
                    "Fixed-width baseline of {} bits per symbol is not valid, width must be positive",
                    width
                )
            }
            Self::MalformedBitSequence => {
                write!(f, "Bit sequence does not end on a codeword boundary")
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadDocument(path, error) => {
                write!(f, "Failed to read document '{}': {}", path, error)
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
