//! Error types for codonust.
//!
//! Every failure is terminal for the run: this is a single-pass batch tool
//! with no per-record recovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in codonust operations.
#[derive(Debug, Error)]
pub enum CodonUsageError {
    /// Failed to open or parse the input sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Two records in the input share an identifier.
    #[error("duplicate record identifier '{id}'")]
    DuplicateRecord { id: String },

    /// A complete triplet did not match any sense codon of the standard
    /// genetic code. `position` is the byte offset of the triplet's first
    /// base within the record's sequence.
    #[error(
        "record '{record}': triplet '{codon}' at position {position} is not a sense codon of the standard genetic code"
    )]
    UnknownCodon {
        record: String,
        codon: String,
        position: usize,
    },

    /// Failed to write the usage table.
    #[error("failed to write output: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },
}
