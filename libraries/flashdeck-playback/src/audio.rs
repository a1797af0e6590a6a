//! External audio player management
//!
//! At most one player process is alive at a time. Each play request
//! inspects the tracked process: a live one is terminated before the
//! replacement starts, a dead one is simply forgotten.
//!
//! Audio is best-effort. Unplayable references and launch failures are
//! logged and swallowed so navigation never fails because of sound.

use crate::error::{PlaybackError, Result};
use flashdeck_core::is_url;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Child;

/// A running player process
pub trait PlayerProcess: Send {
    /// OS process id
    fn id(&self) -> u32;

    /// Whether the process has not exited yet
    fn is_alive(&mut self) -> bool;

    /// Stop the process and reap it
    fn terminate(&mut self) -> Result<()>;
}

/// Starts a player process for one sound reference
///
/// Implementations encapsulate the platform-specific spawn shape.
pub trait AudioLauncher: Send {
    fn launch(&self, sound: &str) -> Result<Box<dyn PlayerProcess>>;
}

impl PlayerProcess for Child {
    fn id(&self) -> u32 {
        Child::id(self)
    }

    fn is_alive(&mut self) -> bool {
        matches!(self.try_wait(), Ok(None))
    }

    fn terminate(&mut self) -> Result<()> {
        let pid = Child::id(self);

        match self.kill() {
            Ok(()) => {}
            // Already exited; older std reports this as InvalidInput
            Err(e) if e.kind() == ErrorKind::InvalidInput => {}
            Err(source) => return Err(PlaybackError::Terminate { pid, source }),
        }

        self.wait()
            .map(|_| ())
            .map_err(|source| PlaybackError::Terminate { pid, source })
    }
}

/// Whether a sound reference can be handed to the player
///
/// Empty references never play; otherwise the reference must look like a
/// URL or name an existing path.
pub fn is_playable(sound: &str) -> bool {
    !sound.is_empty() && (is_url(sound) || Path::new(sound).exists())
}

/// Owner of the single tracked player process
pub struct AudioPlayback {
    launcher: Box<dyn AudioLauncher>,
    active: Option<Box<dyn PlayerProcess>>,
}

impl AudioPlayback {
    /// Create a playback manager around a launcher
    pub fn new(launcher: impl AudioLauncher + 'static) -> Self {
        Self {
            launcher: Box::new(launcher),
            active: None,
        }
    }

    /// Play a sound, replacing whatever is playing
    ///
    /// Silently does nothing for empty or unreachable references.
    pub fn play(&mut self, sound: &str) {
        if !is_playable(sound) {
            tracing::debug!("Skipping unplayable sound reference {:?}", sound);
            return;
        }

        self.stop();

        match self.launcher.launch(sound) {
            Ok(process) => {
                tracing::debug!("Audio player started (pid {}) for {}", process.id(), sound);
                self.active = Some(process);
            }
            Err(e) => {
                tracing::warn!("Audio playback unavailable: {}", e);
            }
        }
    }

    /// Terminate the tracked process if it is still running
    pub fn stop(&mut self) {
        let Some(mut process) = self.active.take() else {
            return;
        };

        if !process.is_alive() {
            tracing::debug!("Audio player (pid {}) already exited", process.id());
            return;
        }

        match process.terminate() {
            Ok(()) => tracing::debug!("Audio player (pid {}) terminated", process.id()),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Process id of the tracked player, if any
    pub fn active_pid(&self) -> Option<u32> {
        self.active.as_ref().map(|process| process.id())
    }

    /// Whether the tracked player is still running
    pub fn is_playing(&mut self) -> bool {
        self.active.as_mut().is_some_and(|process| process.is_alive())
    }
}

impl Drop for AudioPlayback {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for AudioPlayback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPlayback")
            .field("active_pid", &self.active_pid())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Spawned {
        next_pid: AtomicU32,
        processes: Mutex<Vec<(u32, Arc<AtomicBool>)>>,
    }

    struct FakeProcess {
        pid: u32,
        alive: Arc<AtomicBool>,
    }

    impl PlayerProcess for FakeProcess {
        fn id(&self) -> u32 {
            self.pid
        }

        fn is_alive(&mut self) -> bool {
            self.alive.load(Ordering::SeqCst)
        }

        fn terminate(&mut self) -> Result<()> {
            self.alive.store(false, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FakeLauncher {
        spawned: Arc<Spawned>,
        fail: bool,
    }

    impl AudioLauncher for FakeLauncher {
        fn launch(&self, _sound: &str) -> Result<Box<dyn PlayerProcess>> {
            if self.fail {
                return Err(PlaybackError::Launch {
                    program: "ffplay".to_string(),
                    source: std::io::Error::from(ErrorKind::NotFound),
                });
            }

            let pid = self.spawned.next_pid.fetch_add(1, Ordering::SeqCst) + 100;
            let alive = Arc::new(AtomicBool::new(true));
            self.spawned.processes.lock().unwrap().push((pid, Arc::clone(&alive)));
            Ok(Box::new(FakeProcess { pid, alive }))
        }
    }

    fn fake_playback(fail: bool) -> (AudioPlayback, Arc<Spawned>) {
        let spawned = Arc::new(Spawned::default());
        let launcher = FakeLauncher {
            spawned: Arc::clone(&spawned),
            fail,
        };
        (AudioPlayback::new(launcher), spawned)
    }

    fn live_count(spawned: &Spawned) -> usize {
        spawned
            .processes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, alive)| alive.load(Ordering::SeqCst))
            .count()
    }

    const URL_A: &str = "https://example.com/a.mp3";
    const URL_B: &str = "https://example.com/b.mp3";

    #[test]
    fn second_play_terminates_first() {
        let (mut playback, spawned) = fake_playback(false);

        playback.play(URL_A);
        let first = playback.active_pid().unwrap();
        playback.play(URL_B);
        let second = playback.active_pid().unwrap();

        assert_ne!(first, second);
        assert_eq!(live_count(&spawned), 1);
        assert!(playback.is_playing());
    }

    #[test]
    fn exited_process_is_replaced_without_kill() {
        let (mut playback, spawned) = fake_playback(false);

        playback.play(URL_A);
        spawned.processes.lock().unwrap()[0].1.store(false, Ordering::SeqCst);
        assert!(!playback.is_playing());

        playback.play(URL_B);
        assert_eq!(spawned.processes.lock().unwrap().len(), 2);
        assert_eq!(live_count(&spawned), 1);
    }

    #[test]
    fn empty_reference_is_ignored() {
        let (mut playback, spawned) = fake_playback(false);

        playback.play("");
        assert!(playback.active_pid().is_none());
        assert!(spawned.processes.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_ignored() {
        let (mut playback, spawned) = fake_playback(false);

        playback.play("/definitely/not/here/perro.mp3");
        assert!(playback.active_pid().is_none());
        assert!(spawned.processes.lock().unwrap().is_empty());
    }

    #[test]
    fn existing_file_plays() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let (mut playback, _spawned) = fake_playback(false);

        playback.play(file.path().to_str().unwrap());
        assert!(playback.active_pid().is_some());
    }

    #[test]
    fn launch_failure_is_swallowed() {
        let (mut playback, _spawned) = fake_playback(true);

        playback.play(URL_A);
        assert!(playback.active_pid().is_none());
        assert!(!playback.is_playing());
    }

    #[test]
    fn drop_terminates_live_player() {
        let (mut playback, spawned) = fake_playback(false);
        playback.play(URL_A);
        assert_eq!(live_count(&spawned), 1);

        drop(playback);
        assert_eq!(live_count(&spawned), 0);
    }

    #[cfg(unix)]
    #[test]
    fn child_process_lifecycle() {
        let mut child: Box<dyn PlayerProcess> =
            Box::new(std::process::Command::new("sleep").arg("5").spawn().unwrap());

        assert!(child.is_alive());
        child.terminate().unwrap();
        assert!(!child.is_alive());
    }
}
