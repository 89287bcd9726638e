//! Usage table assembly and text rendering.
//!
//! The table is built by collecting every record's count vector first, then
//! rendering all columns against the fixed codon index at the end. Columns
//! keep record input order; rows keep index order.

use std::io::{self, Write};

use crate::{
    cli::UnknownCodonPolicy,
    code::CodonIndex,
    error::CodonUsageError,
    tally::{tally, CodonCounts},
};

/// The assembled codon usage table: one row per sense codon, one column per
/// record.
#[derive(Debug, Clone)]
pub struct UsageTable {
    index: CodonIndex,
    columns: Vec<(String, CodonCounts)>,
}

impl UsageTable {
    /// An empty table over the given index.
    #[must_use]
    pub fn new(index: CodonIndex) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Builds a table from `(identifier, sequence)` records, tallying each
    /// in iteration order.
    pub fn from_records<I, S>(
        index: CodonIndex,
        records: I,
        policy: UnknownCodonPolicy,
    ) -> Result<Self, CodonUsageError>
    where
        I: IntoIterator<Item = (String, S)>,
        S: AsRef<[u8]>,
    {
        let mut table = Self::new(index);
        for (id, seq) in records {
            let counts = tally(&table.index, &id, seq.as_ref(), policy)?;
            table.push_column(id, counts)?;
        }
        Ok(table)
    }

    /// Appends one record's counts as the next column.
    ///
    /// Record identifiers double as column labels, so a duplicate identifier
    /// is rejected rather than silently renamed.
    pub fn push_column(&mut self, id: String, counts: CodonCounts) -> Result<(), CodonUsageError> {
        if self.columns.iter().any(|(existing, _)| *existing == id) {
            return Err(CodonUsageError::DuplicateRecord { id });
        }
        self.columns.push((id, counts));
        Ok(())
    }

    /// Number of rows: 61 for the standard code, whatever the input.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column labels in input order.
    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(id, _)| id.as_str())
    }

    /// Count of `codon` in the column at `column`, or `None` if either does
    /// not exist.
    #[must_use]
    pub fn count(&self, codon: &str, column: usize) -> Option<u64> {
        let label = <[u8; 3]>::try_from(codon.as_bytes()).ok()?;
        let row = self.index.position(label)?;
        self.columns.get(column).map(|(_, counts)| counts.get(row))
    }

    /// Writes the table as aligned text: an `aa codon` label pair per row,
    /// record identifiers as column headers, right-aligned integer cells.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|(id, counts)| {
                let digits = counts
                    .iter()
                    .map(|count| count.to_string().len())
                    .max()
                    .unwrap_or(1);
                id.len().max(digits)
            })
            .collect();

        write!(w, "{:<2}  {:<5}", "aa", "codon")?;
        for ((id, _), width) in self.columns.iter().zip(widths.iter().copied()) {
            write!(w, "  {id:>width$}")?;
        }
        writeln!(w)?;

        for (row, entry) in self.index.entries().iter().enumerate() {
            write!(w, "{:<2}  {:<5}", entry.amino_acid, entry.codon)?;
            for ((_, counts), width) in self.columns.iter().zip(widths.iter().copied()) {
                let count = counts.get(row);
                write!(w, "  {count:>width$}")?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}
