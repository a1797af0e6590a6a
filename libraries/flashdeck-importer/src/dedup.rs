//! Duplicate removal
//!
//! Two records are duplicates when their fronts match and their comparable
//! backs match. A back of the form `<script>----<latin>` compares on the
//! segment after the marker; a marker at position 0 does not count.

use crate::shuffle::renumber;
use crate::DeckRecord;
use std::collections::HashSet;

const SCRIPT_MARKER: &str = "----";

/// The part of a back text used for duplicate comparison
pub fn comparable_back(back: &str) -> &str {
    match back.find(SCRIPT_MARKER) {
        Some(position) if position > 0 => back
            .split(SCRIPT_MARKER)
            .nth(1)
            .unwrap_or_default(),
        _ => back,
    }
}

/// Drop repeated records, keeping the earliest of each cluster, then renumber
///
/// Returns how many records were removed.
pub fn remove_duplicates(records: &mut Vec<DeckRecord>) -> usize {
    let before = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(before);

    records.retain(|record| {
        let key = (record.front.clone(), comparable_back(&record.back).to_string());
        seen.insert(key)
    });

    renumber(records);

    let removed = before - records.len();
    if removed > 0 {
        tracing::debug!("Removed {} duplicate records", removed);
    }
    removed
}
