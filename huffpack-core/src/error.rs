//! Error types for huffpack operations.
//!
//! Every failure the codec can report is a distinct variant so callers can
//! tell "this file was not produced by us" apart from a truncated stream or a
//! plain I/O problem.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for huffpack operations.
#[derive(Debug, Error)]
pub enum HuffpackError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened or read.
    #[error("Cannot open input {}: {source}", path.display())]
    InputNotFound {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output file could not be created.
    #[error("Cannot write output {}: {source}", path.display())]
    OutputNotWritable {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input contained no bytes, so there is nothing to build a code from.
    #[error("Input is empty: no symbols to build a Huffman code from")]
    EmptyAlphabet,

    /// The leading magic number does not identify this format.
    #[error("Format mismatch: expected magic {expected}, found {found}")]
    FormatMismatch {
        /// Magic number the decoder was configured with.
        expected: u32,
        /// Magic number read from the stream.
        found: u32,
    },

    /// The stream ended in the middle of a field.
    #[error("Unexpected end of stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the data ran out.
        bit_position: u64,
    },

    /// The serialized tree in the header is inconsistent.
    #[error("Malformed Huffman tree: {message}")]
    MalformedTree {
        /// Description of the inconsistency.
        message: String,
    },

    /// A symbol value outside 0..=256, or a symbol without a code.
    #[error("Invalid symbol: {symbol}")]
    InvalidSymbol {
        /// The offending symbol value.
        symbol: u32,
    },
}

/// Result type alias for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffpackError>;

impl HuffpackError {
    /// Create an input-not-found error.
    pub fn input_not_found(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an output-not-writable error.
    pub fn output_not_writable(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::OutputNotWritable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a format mismatch error.
    pub fn format_mismatch(expected: u32, found: u32) -> Self {
        Self::FormatMismatch { expected, found }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create a malformed tree error.
    pub fn malformed_tree(message: impl Into<String>) -> Self {
        Self::MalformedTree {
            message: message.into(),
        }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(symbol: u32) -> Self {
        Self::InvalidSymbol { symbol }
    }

    /// Whether this error means the stream was not produced by this codec.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self, Self::FormatMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffpackError::format_mismatch(1998, 0xDEADBEEF);
        assert!(err.to_string().contains("Format mismatch"));
        assert!(err.to_string().contains("1998"));

        let err = HuffpackError::malformed_tree("too many leaves");
        assert!(err.to_string().contains("too many leaves"));

        let err = HuffpackError::EmptyAlphabet;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_path_errors_keep_source() {
        use std::error::Error;

        let err = HuffpackError::input_not_found(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
        assert!(!err.is_format_mismatch());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HuffpackError = io_err.into();
        assert!(matches!(err, HuffpackError::Io(_)));
    }
}
