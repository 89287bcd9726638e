//! The standard genetic code and the codon index derived from it.
//!
//! The index covers the 61 sense codons of NCBI translation table 1
//! ("Standard"). Stop codons (TAA, TAG, TGA) have no row: a triplet without
//! a row is the tally engine's error case, not a zero count.

use std::collections::HashMap;

/// Amino-acid assignments of NCBI translation table 1, in NCBI codon order
/// (Base1, Base2, Base3 each cycling over TCAG). `*` marks a stop codon.
const NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

/// One row of the codon index: a sense codon and the amino acid it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonEntry {
    pub amino_acid: char,
    pub codon: String,
}

/// The fixed, ordered set of (amino acid, codon) pairs over the 61 sense
/// codons of the standard genetic code.
///
/// Entries are sorted by amino acid, then codon, and that order defines row
/// order in every usage table, so output is deterministic across runs.
#[derive(Debug, Clone)]
pub struct CodonIndex {
    entries: Vec<CodonEntry>,
    positions: HashMap<[u8; 3], usize>,
}

impl CodonIndex {
    /// Builds the index for NCBI genetic code table 1.
    #[must_use]
    pub fn standard() -> Self {
        let codons = BASES.iter().flat_map(|&b1| {
            BASES
                .iter()
                .flat_map(move |&b2| BASES.iter().map(move |&b3| [b1, b2, b3]))
        });

        let mut entries: Vec<CodonEntry> = codons
            .zip(NCBIEAA.chars())
            .filter(|&(_, aa)| aa != '*')
            .map(|(label, aa)| CodonEntry {
                amino_acid: aa,
                codon: label.iter().map(|&b| b as char).collect(),
            })
            .collect();

        entries.sort_by(|a, b| {
            a.amino_acid
                .cmp(&b.amino_acid)
                .then_with(|| a.codon.cmp(&b.codon))
        });

        let positions = entries
            .iter()
            .enumerate()
            .filter_map(|(row, entry)| {
                let bytes = entry.codon.as_bytes();
                <[u8; 3]>::try_from(bytes).ok().map(|label| (label, row))
            })
            .collect();

        Self { entries, positions }
    }

    /// Number of rows (61 for the standard code).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in table order.
    #[must_use]
    pub fn entries(&self) -> &[CodonEntry] {
        &self.entries
    }

    /// Row position of a sense codon.
    ///
    /// Returns `None` for stop codons and for labels outside the uppercase
    /// {A,C,G,T} triplet alphabet; normalizing case is the caller's job.
    #[must_use]
    pub fn position(&self, codon: [u8; 3]) -> Option<usize> {
        self.positions.get(&codon).copied()
    }
}

impl Default for CodonIndex {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_61_sense_codons() {
        let index = CodonIndex::standard();
        assert_eq!(index.len(), 61);
        assert!(!index.is_empty());
        assert_eq!(index.entries().len(), index.positions.len());
    }

    #[test]
    fn stop_codons_have_no_row() {
        let index = CodonIndex::standard();
        assert_eq!(index.position(*b"TAA"), None);
        assert_eq!(index.position(*b"TAG"), None);
        assert_eq!(index.position(*b"TGA"), None);
    }

    #[test]
    fn atg_encodes_methionine() {
        let index = CodonIndex::standard();
        let row = index.position(*b"ATG").unwrap();
        assert_eq!(index.entries()[row].amino_acid, 'M');
        assert_eq!(index.entries()[row].codon, "ATG");
    }

    #[test]
    fn tryptophan_has_a_single_codon() {
        let index = CodonIndex::standard();
        let trp: Vec<_> = index
            .entries()
            .iter()
            .filter(|e| e.amino_acid == 'W')
            .collect();
        assert_eq!(trp.len(), 1);
        assert_eq!(trp[0].codon, "TGG");
    }

    #[test]
    fn entries_are_sorted_and_unique() {
        let index = CodonIndex::standard();
        let keys: Vec<_> = index
            .entries()
            .iter()
            .map(|e| (e.amino_acid, e.codon.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn alanine_rows_come_first() {
        let index = CodonIndex::standard();
        let head: Vec<String> = index
            .entries()
            .iter()
            .take(4)
            .map(|e| format!("{}:{}", e.amino_acid, e.codon))
            .collect();
        insta::assert_snapshot!(head.join(" "), @"A:GCA A:GCC A:GCG A:GCT");
    }

    #[test]
    fn every_triplet_is_indexed_or_a_stop() {
        let index = CodonIndex::standard();
        let mut unindexed = Vec::new();

        for b1 in BASES {
            for b2 in BASES {
                for b3 in BASES {
                    let label = [b1, b2, b3];
                    if index.position(label).is_none() {
                        unindexed.push(label);
                    }
                }
            }
        }

        // The only triplets without a row are the three stop codons.
        unindexed.sort();
        assert_eq!(unindexed, [*b"TAA", *b"TAG", *b"TGA"]);
    }

    #[test]
    fn lowercase_labels_are_not_indexed() {
        let index = CodonIndex::standard();
        assert_eq!(index.position(*b"atg"), None);
    }

    #[test]
    fn positions_agree_with_entries() {
        let index = CodonIndex::standard();
        for (row, entry) in index.entries().iter().enumerate() {
            let label = <[u8; 3]>::try_from(entry.codon.as_bytes()).unwrap();
            assert_eq!(index.position(label), Some(row));
        }
    }
}
