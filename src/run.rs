//! Codon usage counting and output.
//!
//! The whole run is one sequential pass: read every record, tally each one
//! in input order, assemble the table, print it. Any error aborts the run.

use std::{
    fmt::Debug,
    io::{stdout, BufWriter, Write},
    path::Path,
};

use crate::{
    cli::UnknownCodonPolicy, code::CodonIndex, error::CodonUsageError, reader, table::UsageTable,
};

#[cfg(feature = "tracing")]
use tracing::info;

/// Computes the codon usage table for a FASTA file.
///
/// This is the library entry point: it reads all records, tallies each one,
/// and returns the assembled table without printing anything.
///
/// # Errors
///
/// Returns `CodonUsageError::SequenceRead` if the file cannot be read or
/// parsed, `CodonUsageError::UnknownCodon` under the fail-fast policy when a
/// triplet has no index row, and `CodonUsageError::DuplicateRecord` when two
/// records share an identifier.
pub fn usage_table<P>(path: P, policy: UnknownCodonPolicy) -> Result<UsageTable, CodonUsageError>
where
    P: AsRef<Path> + Debug,
{
    let records = reader::read(&path)?;

    #[cfg(feature = "tracing")]
    info!(records = records.len(), path = ?path, "read FASTA records");

    let table = UsageTable::from_records(
        CodonIndex::standard(),
        records.into_iter().map(|record| (record.id, record.seq)),
        policy,
    )?;

    #[cfg(feature = "tracing")]
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "assembled usage table"
    );

    Ok(table)
}

/// Counts codon usage in a FASTA file and writes the table to stdout.
///
/// # Errors
///
/// Returns every error of [`usage_table`], plus `CodonUsageError::Write` if
/// the table cannot be written.
pub fn run<P>(path: P, policy: UnknownCodonPolicy) -> Result<(), CodonUsageError>
where
    P: AsRef<Path> + Debug,
{
    let table = usage_table(path, policy)?;

    let mut buf = BufWriter::new(stdout());
    table.render(&mut buf)?;
    buf.flush()?;

    Ok(())
}
