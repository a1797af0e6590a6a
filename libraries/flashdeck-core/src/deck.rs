//! Ordered deck with a current-card pointer
//!
//! Navigation semantics:
//! - Forward from the last card wraps to card 1, backward from card 1 wraps
//!   to card N
//! - Absolute targets outside `1..=N` leave the pointer untouched
//! - Every move lands on the front of the destination card

use crate::error::{DeckError, Result};
use crate::types::{Direction, Flashcard, NavTarget, Side};

/// The full ordered collection of cards for a session
///
/// Ids are always `1..=N` in storage order, so the card with id `k` lives at
/// index `k - 1`. The current index refers to an existing card whenever the
/// deck is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
    current: usize,
}

impl Deck {
    /// Build a deck, rejecting cards whose ids are not dense and ordered
    pub fn new(cards: Vec<Flashcard>) -> Result<Self> {
        for (position, card) in cards.iter().enumerate() {
            let expected = position as u32 + 1;
            if card.id != expected {
                return Err(DeckError::NonContiguousIds {
                    position,
                    expected,
                    found: card.id,
                });
            }
        }

        Ok(Self { cards, current: 0 })
    }

    /// A deck with no cards ("no data loaded")
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in deck order
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Look up a card by id
    pub fn card(&self, id: u32) -> Option<&Flashcard> {
        let index = (id as usize).checked_sub(1)?;
        self.cards.get(index)
    }

    /// The card under the pointer
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.current)
    }

    /// Mutable access to the card under the pointer
    pub fn current_mut(&mut self) -> Option<&mut Flashcard> {
        self.cards.get_mut(self.current)
    }

    /// 1-based position of the current card
    pub fn position(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.current + 1)
        }
    }

    /// Compute the destination index for a target without moving
    ///
    /// Returns `None` when the target does not name an existing card.
    pub fn resolve(&self, target: NavTarget) -> Option<usize> {
        let len = self.cards.len();
        if len == 0 {
            return None;
        }

        match target {
            NavTarget::Relative(Direction::Forward) => Some((self.current + 1) % len),
            NavTarget::Relative(Direction::Backward) => {
                Some(if self.current == 0 { len - 1 } else { self.current - 1 })
            }
            NavTarget::Absolute(id) => {
                let index = (id as usize).checked_sub(1)?;
                (index < len).then_some(index)
            }
            NavTarget::JumpStart => Some(0),
            NavTarget::JumpEnd => Some(len - 1),
        }
    }

    /// Move the pointer, revealing the destination's front
    ///
    /// Returns the destination card, or `None` if nothing changed.
    pub fn move_to(&mut self, target: NavTarget) -> Option<&Flashcard> {
        let index = self.resolve(target)?;
        self.current = index;

        let card = &mut self.cards[index];
        card.visible_side = Side::Front;
        Some(card)
    }

    /// Jump to the card whose id is exactly `text`
    ///
    /// Anything that is not an integer naming an existing id is "not found"
    /// and leaves the deck untouched.
    pub fn goto_index(&mut self, text: &str) -> Option<&Flashcard> {
        let id: u32 = text.trim().parse().ok()?;
        self.card(id)?;
        self.move_to(NavTarget::Absolute(id))
    }

    /// Flip the current card, returning it after the toggle
    pub fn flip_current(&mut self) -> Option<&Flashcard> {
        let card = self.current_mut()?;
        card.flip();
        Some(card)
    }
}
