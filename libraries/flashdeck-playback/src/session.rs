//! Study session - shared deck, flip and audio
//!
//! The session is the single owner of the deck and the audio manager once
//! loading is done. Both the controlling thread and the autoplay thread
//! call into it; the deck and the tracked player each sit behind their own
//! mutex, so a move and a flip can never interleave mid-update. When both
//! are needed the deck is locked first.

use crate::audio::AudioPlayback;
use crate::autoplay::AutoplayTarget;
use crossbeam_channel::{unbounded, Receiver, Sender};
use flashdeck_core::{Deck, DeckEvent, Direction, Flashcard, NavTarget, Side};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the value if another thread panicked mid-hold
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A navigable deck with audio, emitting display events
pub struct StudySession {
    deck: Mutex<Deck>,
    audio: Mutex<AudioPlayback>,
    events: Sender<DeckEvent>,
}

impl StudySession {
    /// Create a session and the receiving end of its event stream
    pub fn new(deck: Deck, audio: AudioPlayback) -> (Self, Receiver<DeckEvent>) {
        let (events, receiver) = unbounded();
        let session = Self {
            deck: Mutex::new(deck),
            audio: Mutex::new(audio),
            events,
        };
        (session, receiver)
    }

    /// Another sender onto this session's event stream
    pub fn event_sender(&self) -> Sender<DeckEvent> {
        self.events.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.deck).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.deck).is_empty()
    }

    /// Snapshot of the current card
    pub fn current(&self) -> Option<Flashcard> {
        lock(&self.deck).current().cloned()
    }

    /// 1-based position of the current card
    pub fn position(&self) -> Option<usize> {
        lock(&self.deck).position()
    }

    /// Emit the current card and counter so a display can draw the start state
    pub fn announce(&self) {
        let deck = lock(&self.deck);
        if let (Some(card), Some(position)) = (deck.current(), deck.position()) {
            self.emit_card_changed(card.clone(), position, deck.len());
        }
    }

    /// Move the current-card pointer
    ///
    /// Returns the current card after the request; targets that name no card
    /// leave it unchanged and emit nothing.
    pub fn move_to(&self, target: NavTarget) -> Option<Flashcard> {
        let mut deck = lock(&self.deck);

        let moved = deck.move_to(target).cloned();
        let Some(card) = moved else {
            return deck.current().cloned();
        };

        let position = card.id as usize;
        let total = deck.len();
        drop(deck);

        self.emit_card_changed(card.clone(), position, total);
        Some(card)
    }

    /// Jump to the card whose id is exactly `text`
    ///
    /// Returns `None` ("not found") for anything that is not an existing id.
    pub fn goto_index(&self, text: &str) -> Option<Flashcard> {
        let mut deck = lock(&self.deck);

        let card = deck.goto_index(text).cloned();
        let total = deck.len();
        drop(deck);

        match card {
            Some(card) => {
                self.emit_card_changed(card.clone(), card.id as usize, total);
                Some(card)
            }
            None => {
                tracing::debug!("Goto target {:?} not found", text);
                None
            }
        }
    }

    /// Flip the current card
    ///
    /// Turning to the back plays the card's sound; turning to the front never
    /// does. The deck stays locked until the player has started, so a
    /// competing flip cannot turn the card back while its sound launches.
    pub fn flip(&self) -> Option<Flashcard> {
        let mut deck = lock(&self.deck);
        let card = deck.flip_current().cloned()?;

        let _ = self.events.send(DeckEvent::SideChanged {
            text: card.visible_text().to_string(),
            card: card.clone(),
        });

        if card.visible_side == Side::Back && card.has_sound() {
            lock(&self.audio).play(&card.sound_path);
        }
        drop(deck);

        Some(card)
    }

    /// Replay the current card's sound if its back is showing
    pub fn replay_sound(&self) {
        let deck = lock(&self.deck);
        let Some(card) = deck.current() else {
            return;
        };

        if card.visible_side == Side::Back {
            lock(&self.audio).play(&card.sound_path);
        }
    }

    /// Process id of the tracked audio player, if any
    pub fn audio_pid(&self) -> Option<u32> {
        lock(&self.audio).active_pid()
    }

    /// Stop audio and forget the tracked player
    pub fn shutdown(&self) {
        lock(&self.audio).stop();
        tracing::debug!("Study session shut down");
    }

    fn emit_card_changed(&self, card: Flashcard, position: usize, total: usize) {
        let _ = self.events.send(DeckEvent::CardChanged {
            card,
            position,
            total,
        });
        let _ = self.events.send(DeckEvent::CounterUpdated { position, total });
    }
}

impl AutoplayTarget for StudySession {
    fn auto_flip(&self) {
        self.flip();
    }

    fn auto_walk(&self) {
        self.move_to(NavTarget::Relative(Direction::Forward));
    }
}

impl Drop for StudySession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for StudySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudySession")
            .field("len", &self.len())
            .field("position", &self.position())
            .finish_non_exhaustive()
    }
}
