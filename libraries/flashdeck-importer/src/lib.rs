//! flashdeck Importer
//!
//! Turns a delimited deck file into a ready-to-study [`Deck`](flashdeck_core::Deck).
//!
//! # Pipeline
//!
//! 1. `reader`: parse `id, front, back, sound` rows, skipping `id` headers
//! 2. `paths`: join relative sound references onto the deck's base path
//! 3. `shuffle`: optional random permutation, renumbered 1..N
//! 4. `dedup`: optional duplicate removal, renumbered 1..N
//! 5. `loader`: orchestration and card materialization
//!
//! # Example
//!
//! ```rust
//! use flashdeck_importer::{read_records, DeckLoader, LoadOptions};
//!
//! let data = "id;front;back;sound\n1;dog;perro;perro.mp3\n2;dog;perro;\n";
//! let records = read_records(data.as_bytes(), ';').unwrap();
//!
//! let loader = DeckLoader::new(LoadOptions {
//!     remove_duplicates: true,
//!     ..LoadOptions::default()
//! });
//! let deck = loader.load(records, "/decks/spanish");
//!
//! assert_eq!(deck.len(), 1);
//! assert_eq!(deck.cards()[0].sound_path, "/decks/spanish/perro.mp3");
//! ```

mod error;
mod types;

// Core modules
pub mod dedup;
pub mod loader;
pub mod paths;
pub mod reader;
pub mod shuffle;

pub use error::ImportError;
pub use loader::DeckLoader;
pub use reader::{read_records, read_records_from_path};
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
