//! FASTA input.
//!
//! Consumes a file path and produces the ordered collection of named
//! sequences the tally engine iterates over. With the `gzip` feature,
//! `.gz`-suffixed files are decompressed transparently.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use bio::io::fasta;

use crate::error::CodonUsageError;

/// A named nucleotide sequence read from the input file.
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

fn read_error(source: std::io::Error, path: &Path) -> CodonUsageError {
    CodonUsageError::SequenceRead {
        source,
        path: PathBuf::from(path),
    }
}

fn collect_records<R: Read>(reader: R, path: &Path) -> Result<Vec<SequenceRecord>, CodonUsageError> {
    let mut records = Vec::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record.map_err(|source| read_error(source, path))?;
        records.push(SequenceRecord {
            id: record.id().to_string(),
            seq: record.seq().to_vec(),
        });
    }
    Ok(records)
}

/// Reads all records from a FASTA file, in file order.
#[cfg(not(feature = "gzip"))]
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, CodonUsageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| read_error(source, path))?;
    collect_records(file, path)
}

/// Reads all records from a FASTA file, in file order (gzip version).
#[cfg(feature = "gzip")]
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, CodonUsageError> {
    use flate2::read::GzDecoder;

    let path = path.as_ref();
    let file = File::open(path).map_err(|source| read_error(source, path))?;

    if is_gzip_path(path) {
        collect_records(GzDecoder::new(file), path)
    } else {
        collect_records(file, path)
    }
}
