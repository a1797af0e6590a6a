//! Import types

use serde::{Deserialize, Serialize};

/// Default field separator for deck files
pub const DEFAULT_DELIMITER: char = ';';

/// One parsed row of a deck file, before it becomes a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    /// Card id; reassigned whenever the records are rearranged or pruned
    pub id: u32,

    pub front: String,

    pub back: String,

    /// Sound reference: relative path, absolute path, URL or empty
    pub sound: String,
}

impl DeckRecord {
    pub fn new(
        id: u32,
        front: impl Into<String>,
        back: impl Into<String>,
        sound: impl Into<String>,
    ) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            sound: sound.into(),
        }
    }
}

/// Options applied while assembling a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Randomize card order (default: false)
    pub shuffle: bool,

    /// Drop repeated front/back pairs (default: false)
    pub remove_duplicates: bool,

    /// Field separator (default: ';')
    pub delimiter: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            shuffle: false,
            remove_duplicates: false,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}
