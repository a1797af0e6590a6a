//! Core error types for flashdeck
use thiserror::Error;

/// Result type alias using `DeckError`
pub type Result<T> = std::result::Result<T, DeckError>;

/// Core error type for deck construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// Card ids must run 1..=N in deck order
    #[error("Card ids are not contiguous: expected {expected} at position {position}, found {found}")]
    NonContiguousIds {
        position: usize,
        expected: u32,
        found: u32,
    },
}
