//! flashdeck Core
//!
//! Platform-agnostic card model, deck navigation and event types.
//!
//! This crate provides the building blocks shared by the importer, the
//! playback/session layer and every front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Flashcard`, `Side`, `Deck`
//! - **Navigation**: `NavTarget` resolution with wraparound
//! - **Events**: `DeckEvent` for the display layer
//! - **Error Handling**: `DeckError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use flashdeck_core::{Deck, Direction, Flashcard, NavTarget, Side};
//!
//! let mut deck = Deck::new(vec![
//!     Flashcard::new(1, "dog", "perro", ""),
//!     Flashcard::new(2, "cat", "gato", ""),
//! ])
//! .unwrap();
//!
//! deck.flip_current();
//! assert_eq!(deck.current().unwrap().visible_side, Side::Back);
//!
//! let card = deck.move_to(NavTarget::Relative(Direction::Forward)).unwrap();
//! assert_eq!(card.id, 2);
//! assert_eq!(card.visible_side, Side::Front);
//! ```

#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod events;
pub mod sound;
pub mod types;

// Re-export commonly used types
pub use deck::Deck;
pub use error::{DeckError, Result};
pub use events::DeckEvent;
pub use sound::is_url;
pub use types::{Direction, Flashcard, NavTarget, Side};
