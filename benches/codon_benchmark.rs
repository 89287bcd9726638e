use codonust::{cli::UnknownCodonPolicy, code::CodonIndex, table::UsageTable, tally::tally};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A clean coding sequence: repeats of five sense codons.
fn coding_sequence(codons: usize) -> Vec<u8> {
    b"ATGGCTTTTAAAGGT"
        .iter()
        .copied()
        .cycle()
        .take(codons * 3)
        .collect()
}

fn bench_tally(c: &mut Criterion) {
    let index = CodonIndex::standard();
    let seq = coding_sequence(10_000);

    c.bench_function("tally_10k_codons", |b| {
        b.iter(|| tally(&index, "bench", black_box(&seq), UnknownCodonPolicy::Fail))
    });
}

fn bench_table_assembly(c: &mut Criterion) {
    let records: Vec<(String, Vec<u8>)> = (0..100)
        .map(|i| (format!("seq{i}"), coding_sequence(100)))
        .collect();

    c.bench_function("assemble_100_columns", |b| {
        b.iter(|| {
            UsageTable::from_records(
                CodonIndex::standard(),
                black_box(records.clone()),
                UnknownCodonPolicy::Fail,
            )
        })
    });
}

fn bench_index_construction(c: &mut Criterion) {
    c.bench_function("codon_index_standard", |b| b.iter(CodonIndex::standard));
}

criterion_group!(
    benches,
    bench_tally,
    bench_table_assembly,
    bench_index_construction
);
criterion_main!(benches);
