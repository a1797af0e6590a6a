//! flashdeck Playback
//!
//! Everything that happens after a deck is loaded: the shared study
//! session, the external audio player and the autoplay loop.
//!
//! # Architecture
//!
//! - **Session**: `StudySession` owns the deck and audio behind locks and
//!   emits `DeckEvent`s on a channel the display drains
//! - **Audio**: `AudioPlayback` tracks at most one player process started by
//!   an `AudioLauncher` (`FfplayLauncher` in production)
//! - **Autoplay**: `AutoplayScheduler` runs an `AutoplayMachine` on a
//!   background thread against any `AutoplayTarget`
//!
//! # Example
//!
//! ```rust,no_run
//! use flashdeck_core::{Deck, Flashcard};
//! use flashdeck_playback::{
//!     resolve_player_path, AudioPlayback, AutoplayScheduler, AutoplayTiming, FfplayLauncher,
//!     StudySession,
//! };
//! use std::sync::Arc;
//!
//! let deck = Deck::new(vec![Flashcard::new(1, "dog", "perro", "sounds/perro.mp3")]).unwrap();
//! let launcher = FfplayLauncher::new(resolve_player_path(None));
//! let (session, events) = StudySession::new(deck, AudioPlayback::new(launcher));
//! let session = Arc::new(session);
//!
//! let mut autoplay = AutoplayScheduler::new(Arc::clone(&session), AutoplayTiming::default())
//!     .with_events(session.event_sender());
//! autoplay.set_auto_flip(true);
//!
//! for event in events.iter().take(1) {
//!     println!("{:?}", event);
//! }
//!
//! autoplay.shutdown();
//! session.shutdown();
//! ```

#![forbid(unsafe_code)]

pub mod audio;
pub mod autoplay;
pub mod error;
pub mod launcher;
pub mod player;
pub mod session;

// Re-export commonly used types
pub use audio::{is_playable, AudioLauncher, AudioPlayback, PlayerProcess};
pub use autoplay::{
    AutoAction, AutoplayMachine, AutoplayPhase, AutoplayScheduler, AutoplayTarget,
    AutoplayTiming, AutoplayToggles,
};
pub use error::{PlaybackError, Result};
pub use launcher::{FfplayLauncher, SpawnStrategy};
pub use player::resolve_player_path;
pub use session::StudySession;
