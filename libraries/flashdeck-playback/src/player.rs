//! Default audio player resolution
//!
//! An explicitly configured player always wins. Otherwise Windows uses a
//! fixed install location and every other platform asks `whereis`, falling
//! back to the usual system path.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Player binary name looked up on unix-like systems
pub const PLAYER_BINARY: &str = "ffplay";

/// Fixed player location on Windows
pub const WINDOWS_DEFAULT_PLAYER: &str = "C:/ffmpeg/bin/ffplay.exe";

/// Fallback when the lookup finds nothing
pub const FALLBACK_PLAYER: &str = "/usr/bin/ffplay";

/// Resolve the player executable
pub fn resolve_player_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if cfg!(windows) {
        return PathBuf::from(WINDOWS_DEFAULT_PLAYER);
    }

    match whereis(PLAYER_BINARY) {
        Some(path) => path,
        None => {
            tracing::debug!(
                "{} not found via whereis, falling back to {}",
                PLAYER_BINARY,
                FALLBACK_PLAYER
            );
            PathBuf::from(FALLBACK_PLAYER)
        }
    }
}

fn whereis(binary: &str) -> Option<PathBuf> {
    let output = Command::new("whereis").arg(binary).output().ok()?;
    if !output.status.success() || !output.stderr.is_empty() {
        return None;
    }

    parse_whereis_output(&String::from_utf8_lossy(&output.stdout))
}

/// First location reported by `whereis` (`"ffplay: /usr/bin/ffplay ..."`)
pub fn parse_whereis_output(output: &str) -> Option<PathBuf> {
    output.split_whitespace().nth(1).map(PathBuf::from)
}
