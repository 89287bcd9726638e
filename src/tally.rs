//! The sequence tally engine.
//!
//! One pass per record over consecutive non-overlapping 3-byte windows,
//! incrementing index-aligned counts. Trailing bases beyond the last complete
//! triplet are silently ignored.

use crate::{cli::UnknownCodonPolicy, code::CodonIndex, error::CodonUsageError};

/// Codon counts for one record, aligned to a [`CodonIndex`].
///
/// Every slot starts at zero, so a sense codon that never occurs in the
/// sequence reads as 0, never as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonCounts(Vec<u64>);

impl CodonCounts {
    fn zeroed(index: &CodonIndex) -> Self {
        Self(vec![0; index.len()])
    }

    /// Count at an index row; rows outside the index read as 0.
    #[must_use]
    pub fn get(&self, row: usize) -> u64 {
        self.0.get(row).copied().unwrap_or(0)
    }

    /// Counts in index row order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all counts, at most `floor(sequence length / 3)`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Tallies the non-overlapping triplets of `seq` against the codon index.
///
/// Soft-masked (lowercase) bases count as their uppercase form. A triplet
/// without an index row is an error under [`UnknownCodonPolicy::Fail`] and is
/// dropped under [`UnknownCodonPolicy::Skip`].
pub fn tally(
    index: &CodonIndex,
    record_id: &str,
    seq: &[u8],
    policy: UnknownCodonPolicy,
) -> Result<CodonCounts, CodonUsageError> {
    let mut counts = CodonCounts::zeroed(index);

    for (i, triplet) in seq.chunks_exact(3).enumerate() {
        let label = [
            triplet[0].to_ascii_uppercase(),
            triplet[1].to_ascii_uppercase(),
            triplet[2].to_ascii_uppercase(),
        ];

        match index.position(label) {
            Some(row) => counts.0[row] += 1,
            None => match policy {
                UnknownCodonPolicy::Fail => {
                    return Err(CodonUsageError::UnknownCodon {
                        record: record_id.to_string(),
                        codon: String::from_utf8_lossy(triplet).into_owned(),
                        position: i * 3,
                    });
                }
                UnknownCodonPolicy::Skip => {}
            },
        }
    }

    Ok(counts)
}
