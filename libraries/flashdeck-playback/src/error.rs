//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Player process could not be started
    #[error("Failed to launch audio player {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Player process could not be stopped
    #[error("Failed to terminate audio player (pid {pid}): {source}")]
    Terminate {
        pid: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
