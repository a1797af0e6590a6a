//! Card types and navigation targets

use serde::{Deserialize, Serialize};

/// Which face of a card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The side the learner already knows
    #[default]
    Front,

    /// The side being learned; carries the sound
    Back,
}

impl Side {
    /// The opposite face
    pub fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// One two-sided study item
///
/// `visible_side` is the only field that changes after loading, and only
/// through [`Flashcard::flip`] or navigation resetting it to the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Dense 1-based position id within the deck
    pub id: u32,

    /// Text shown on the front
    pub front_text: String,

    /// Text shown on the back
    pub back_text: String,

    /// Resolved sound file path or URL (empty when the card has no audio)
    pub sound_path: String,

    /// Face currently showing
    pub visible_side: Side,
}

impl Flashcard {
    /// Create a card showing its front
    pub fn new(
        id: u32,
        front_text: impl Into<String>,
        back_text: impl Into<String>,
        sound_path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            front_text: front_text.into(),
            back_text: back_text.into(),
            sound_path: sound_path.into(),
            visible_side: Side::Front,
        }
    }

    /// Toggle the visible side and return the new one
    pub fn flip(&mut self) -> Side {
        self.visible_side = self.visible_side.flipped();
        self.visible_side
    }

    /// Text of the side currently showing
    pub fn visible_text(&self) -> &str {
        match self.visible_side {
            Side::Front => &self.front_text,
            Side::Back => &self.back_text,
        }
    }

    /// Whether a sound reference is attached
    pub fn has_sound(&self) -> bool {
        !self.sound_path.is_empty()
    }
}

/// Relative direction for stepping through the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Where a navigation request wants to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    /// One step, wrapping at either end
    Relative(Direction),

    /// A card id (1-based); out-of-range ids are ignored
    Absolute(u32),

    /// Card 1
    JumpStart,

    /// Card N
    JumpEnd,
}
