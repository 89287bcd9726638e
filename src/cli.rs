//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Per-sequence codon usage tables for DNA sequences in FASTA files.
#[derive(Parser, Debug)]
#[command(name = "codonust")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file
    pub path: PathBuf,

    /// What to do with a complete triplet that is not a sense codon
    /// (stop codon, ambiguous or invalid base)
    #[arg(short, long, value_enum, default_value = "fail")]
    pub unknown: UnknownCodonPolicy,

    /// Suppress informational output (only print the usage table)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Policy for triplets with no row in the codon index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum UnknownCodonPolicy {
    /// Abort the run, naming the record and the offending triplet
    #[default]
    Fail,
    /// Drop the triplet and keep counting (deviates from fail-fast reference behavior)
    Skip,
}

impl std::fmt::Display for UnknownCodonPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}
