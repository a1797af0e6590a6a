//! Deck assembly - brings together reading, path resolution, shuffle and dedup
//!
//! Stage order is fixed: resolve sound paths, shuffle, remove duplicates,
//! materialize cards. Every rearranging stage renumbers, so the finished
//! deck always has ids `1..=N`.

use crate::{
    dedup::remove_duplicates, paths, reader, shuffle::shuffle_records_with, DeckRecord,
    LoadOptions, Result,
};
use flashdeck_core::{Deck, Flashcard};
use rand::{thread_rng, Rng};
use std::path::Path;

/// Deck loader configured with shuffle/dedup options
#[derive(Debug, Clone, Default)]
pub struct DeckLoader {
    options: LoadOptions,
}

impl DeckLoader {
    /// Create a new deck loader
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Read a deck file and assemble it
    ///
    /// Sound references are resolved against `sound_base`, or against the
    /// directory containing the deck file when no base is given.
    pub fn load_file(&self, path: &Path, sound_base: Option<&str>) -> Result<Deck> {
        let records = reader::read_records_from_path(path, self.options.delimiter)?;
        let base = match sound_base {
            Some(base) => base.to_string(),
            None => paths::default_sound_base(path),
        };

        tracing::info!("Loaded {} records from {}", records.len(), path.display());
        Ok(self.load(records, &base))
    }

    /// Assemble parsed records into a deck
    pub fn load(&self, records: Vec<DeckRecord>, sound_base: &str) -> Deck {
        let mut rng = thread_rng();
        self.load_with_rng(records, sound_base, &mut rng)
    }

    /// Assemble parsed records with a caller-supplied shuffle generator
    pub fn load_with_rng<R: Rng + ?Sized>(
        &self,
        mut records: Vec<DeckRecord>,
        sound_base: &str,
        rng: &mut R,
    ) -> Deck {
        for record in &mut records {
            record.sound = paths::resolve_sound_reference(sound_base, &record.sound);
        }

        if self.options.shuffle {
            shuffle_records_with(&mut records, rng);
            tracing::debug!("Shuffled {} records", records.len());
        }

        if self.options.remove_duplicates {
            let removed = remove_duplicates(&mut records);
            tracing::info!("Removed {} duplicate cards", removed);
        }

        materialize(records)
    }
}

/// Turn records into cards showing their fronts
fn materialize(records: Vec<DeckRecord>) -> Deck {
    let cards: Vec<Flashcard> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Flashcard::new(index as u32 + 1, record.front, record.back, record.sound)
        })
        .collect();

    // Ids come from enumerate, so they are dense by construction
    Deck::new(cards).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::Side;

    fn spanish_records() -> Vec<DeckRecord> {
        vec![
            DeckRecord::new(1, "dog", "perro", "perro.mp3"),
            DeckRecord::new(2, "cat", "gato", ""),
            DeckRecord::new(3, "dog", "perro", "perro2.mp3"),
        ]
    }

    #[test]
    fn plain_load_keeps_order_and_resolves_sounds() {
        let loader = DeckLoader::default();
        let deck = loader.load(spanish_records(), "/decks");

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.cards()[0].sound_path, "/decks/perro.mp3");
        assert_eq!(deck.cards()[1].sound_path, "");
        assert!(deck.cards().iter().all(|c| c.visible_side == Side::Front));
    }

    #[test]
    fn dedup_yields_dense_ids() {
        let loader = DeckLoader::new(LoadOptions {
            remove_duplicates: true,
            ..LoadOptions::default()
        });
        let deck = loader.load(spanish_records(), "");

        let ids: Vec<u32> = deck.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(deck.cards()[0].front_text, "dog");
        assert_eq!(deck.cards()[1].front_text, "cat");
    }

    #[test]
    fn shuffle_then_dedup_keeps_density() {
        let loader = DeckLoader::new(LoadOptions {
            shuffle: true,
            remove_duplicates: true,
            ..LoadOptions::default()
        });
        let deck = loader.load(spanish_records(), "");

        let ids: Vec<u32> = deck.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_records_make_empty_deck() {
        let loader = DeckLoader::new(LoadOptions {
            shuffle: true,
            remove_duplicates: true,
            ..LoadOptions::default()
        });
        let deck = loader.load(Vec::new(), "/decks");
        assert!(deck.is_empty());
    }
}
