//! Fuzz target for the sequence tally engine.
//!
//! Tallying must handle arbitrary byte input gracefully: never panic, and
//! never count more than the number of complete triplets.

#![no_main]

use codonust::{cli::UnknownCodonPolicy, code::CodonIndex, tally::tally};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let index = CodonIndex::standard();
    let triplets = (data.len() / 3) as u64;

    // The skip policy accepts any input.
    let counts =
        tally(&index, "fuzz", data, UnknownCodonPolicy::Skip).expect("skip policy never fails");
    assert!(
        counts.total() <= triplets,
        "total {} exceeds complete triplets {}",
        counts.total(),
        triplets
    );

    // Fail-fast either errors on some triplet or counts every one of them.
    match tally(&index, "fuzz", data, UnknownCodonPolicy::Fail) {
        Ok(counts) => assert_eq!(counts.total(), triplets),
        Err(err) => {
            let message = err.to_string();
            assert!(message.contains("fuzz"), "error should name the record");
        }
    }
});
