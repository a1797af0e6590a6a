//! ffplay launcher
//!
//! The player is always started with the same argument shape: exit when the
//! sound ends, no video, no window, then the sound reference. How the child
//! is detached from the controlling terminal depends on the platform and is
//! chosen once, when the launcher is configured.

use crate::audio::{AudioLauncher, PlayerProcess};
use crate::error::{PlaybackError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Fixed player arguments preceding the sound reference
pub const PLAYER_ARGS: [&str; 3] = ["-autoexit", "-vn", "-nodisp"];

/// Windows `CREATE_NO_WINDOW` process creation flag
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Platform-specific process-launch shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStrategy {
    /// Start the player in its own process group (unix), so terminal
    /// signals aimed at the study session do not reach it
    ProcessGroup,

    /// Start the player without a console window (windows)
    NoConsoleWindow,

    /// Plain spawn with no platform extras
    Plain,
}

impl SpawnStrategy {
    /// Strategy for the platform this binary was built for
    pub fn for_current_platform() -> Self {
        if cfg!(unix) {
            SpawnStrategy::ProcessGroup
        } else if cfg!(windows) {
            SpawnStrategy::NoConsoleWindow
        } else {
            SpawnStrategy::Plain
        }
    }

    fn apply(self, command: &mut Command) {
        match self {
            #[cfg(unix)]
            SpawnStrategy::ProcessGroup => {
                use std::os::unix::process::CommandExt;
                command.process_group(0);
            }
            #[cfg(windows)]
            SpawnStrategy::NoConsoleWindow => {
                use std::os::windows::process::CommandExt;
                command.creation_flags(CREATE_NO_WINDOW);
            }
            // Strategies for other platforms degrade to a plain spawn
            _ => {}
        }
    }
}

/// Launches `ffplay` (or a compatible player) as a detached child
#[derive(Debug, Clone)]
pub struct FfplayLauncher {
    program: PathBuf,
    strategy: SpawnStrategy,
}

impl FfplayLauncher {
    /// Launcher using the current platform's spawn strategy
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self::with_strategy(program, SpawnStrategy::for_current_platform())
    }

    pub fn with_strategy(program: impl Into<PathBuf>, strategy: SpawnStrategy) -> Self {
        Self {
            program: program.into(),
            strategy,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn strategy(&self) -> SpawnStrategy {
        self.strategy
    }

    /// Build the player command for a sound reference
    pub fn command(&self, sound: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(PLAYER_ARGS)
            .arg(sound)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self.strategy.apply(&mut command);
        command
    }
}

impl AudioLauncher for FfplayLauncher {
    fn launch(&self, sound: &str) -> Result<Box<dyn PlayerProcess>> {
        let child = self
            .command(sound)
            .spawn()
            .map_err(|source| PlaybackError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        Ok(Box::new(child))
    }
}
