//! Per-sequence codon usage tables for DNA sequences in FASTA files.
//!
//! For every record in the input, the sequence is split into consecutive
//! non-overlapping triplets and each complete triplet is tallied against the
//! 61 sense codons of the standard genetic code (NCBI translation table 1).
//! The result is one table: a row per sense codon, grouped by amino acid,
//! and a column per record in input order.
//!
//! Trailing bases beyond the last complete triplet are ignored. A triplet
//! that is not a sense codon (a stop codon, or an ambiguous base) aborts the
//! run by default; `--unknown skip` drops such triplets instead.
//!
//! # Usage
//!
//! ```bash
//! codonust sequences.fa
//! codonust --unknown skip sequences.fa
//! ```
//!
//! # Library example
//!
//! ```rust,no_run
//! use codonust::{usage_table, UnknownCodonPolicy};
//!
//! let table = usage_table("sequences.fa", UnknownCodonPolicy::Fail)?;
//! assert_eq!(table.num_rows(), 61);
//! # Ok::<(), codonust::CodonUsageError>(())
//! ```

pub mod cli;
pub mod code;
pub mod error;
pub mod reader;
pub mod run;
pub mod table;
pub mod tally;

pub use cli::{Args, UnknownCodonPolicy};
pub use code::CodonIndex;
pub use error::CodonUsageError;
pub use run::{run, usage_table};
pub use table::UsageTable;
