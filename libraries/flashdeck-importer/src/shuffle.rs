//! Record shuffling
//!
//! Pure random (Fisher-Yates) permutation followed by renumbering, so ids
//! stay `1..=N` in the new order.

use crate::DeckRecord;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Assign ids 1..N in current order
pub fn renumber(records: &mut [DeckRecord]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.id = index as u32 + 1;
    }
}

/// Shuffle records with the thread-local generator
pub fn shuffle_records(records: &mut [DeckRecord]) {
    let mut rng = thread_rng();
    shuffle_records_with(records, &mut rng);
}

/// Shuffle records with a caller-supplied generator
pub fn shuffle_records_with<R: Rng + ?Sized>(records: &mut [DeckRecord], rng: &mut R) {
    records.shuffle(rng);
    renumber(records);
}
