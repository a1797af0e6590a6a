//! Deck Events
//!
//! Notifications for the display layer. Events are emitted at key points:
//! - Navigation landed on a card
//! - The visible side of the current card changed
//! - The position counter changed
//! - Autoplay toggles changed which controls should be usable

use crate::types::Flashcard;
use serde::{Deserialize, Serialize};

/// Events emitted by a study session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckEvent {
    /// Navigation landed on a card (front showing)
    CardChanged {
        /// Destination card
        card: Flashcard,
        /// 1-based position in the deck
        position: usize,
        /// Number of cards in the deck
        total: usize,
    },

    /// The current card was flipped
    SideChanged {
        /// Card after the flip
        card: Flashcard,
        /// Text of the side now showing
        text: String,
    },

    /// Position counter update ("3/20")
    CounterUpdated { position: usize, total: usize },

    /// Which autoplay checkboxes should accept input
    ///
    /// Enabling auto-flip locks the walk control and vice versa.
    AutoplayControls {
        flip_control_enabled: bool,
        walk_control_enabled: bool,
    },
}

impl DeckEvent {
    /// Control availability for the given toggle state
    pub fn autoplay_controls(auto_flip_enabled: bool, auto_walk_enabled: bool) -> Self {
        DeckEvent::AutoplayControls {
            flip_control_enabled: !auto_walk_enabled,
            walk_control_enabled: !auto_flip_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabling_one_toggle_locks_the_other_control() {
        assert_eq!(
            DeckEvent::autoplay_controls(true, false),
            DeckEvent::AutoplayControls {
                flip_control_enabled: true,
                walk_control_enabled: false,
            }
        );
        assert_eq!(
            DeckEvent::autoplay_controls(false, true),
            DeckEvent::AutoplayControls {
                flip_control_enabled: false,
                walk_control_enabled: true,
            }
        );
        assert_eq!(
            DeckEvent::autoplay_controls(false, false),
            DeckEvent::AutoplayControls {
                flip_control_enabled: true,
                walk_control_enabled: true,
            }
        );
    }
}
