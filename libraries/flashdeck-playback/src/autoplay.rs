//! Autoplay - timer-driven flip and walk
//!
//! A two-phase automaton runs on a background thread:
//!
//! ```text
//! AwaitingFlip --deadline--> flip  --walk on--> AwaitingWalk (now + fliptime)
//!                                  --walk off-> AwaitingFlip (now + fliptime)
//! AwaitingWalk --deadline--> forward ---------> AwaitingFlip (now + switchtime)
//! ```
//!
//! The thread wakes every [`POLL_INTERVAL`] and exits as soon as both
//! toggles are off or its stop channel closes. Enabling a toggle again
//! starts a fresh thread in `AwaitingFlip`.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use flashdeck_core::DeckEvent;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Shortest allowed flip or switch interval (seconds)
pub const MIN_INTERVAL_SECS: f64 = 2.0;

/// Longest accepted interval (seconds); larger values are capped
pub const MAX_INTERVAL_SECS: f64 = 86_400.0;

/// Default time before a card flips (seconds)
pub const DEFAULT_FLIP_SECS: f64 = 4.0;

/// Default time between a flip and the next card (seconds)
pub const DEFAULT_SWITCH_SECS: f64 = 3.0;

/// How often the loop checks its deadline and toggles
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the automaton asks its target to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoAction {
    Flip,
    Walk,
}

/// Automaton phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayPhase {
    AwaitingFlip,
    AwaitingWalk,
}

/// Flip and switch intervals, floor-clamped at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTiming {
    flip_interval: Duration,
    switch_interval: Duration,
}

impl AutoplayTiming {
    /// Intervals in seconds; anything under 2.0 (or not a number) becomes 2.0
    pub fn new(fliptime_secs: f64, switchtime_secs: f64) -> Self {
        Self {
            flip_interval: clamp_interval(fliptime_secs),
            switch_interval: clamp_interval(switchtime_secs),
        }
    }

    pub fn flip_interval(&self) -> Duration {
        self.flip_interval
    }

    pub fn switch_interval(&self) -> Duration {
        self.switch_interval
    }
}

impl Default for AutoplayTiming {
    fn default() -> Self {
        Self::new(DEFAULT_FLIP_SECS, DEFAULT_SWITCH_SECS)
    }
}

fn clamp_interval(secs: f64) -> Duration {
    let secs = if secs.is_nan() {
        MIN_INTERVAL_SECS
    } else {
        secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
    };
    Duration::from_secs_f64(secs)
}

/// The flip/walk automaton, independent of threads and clocks
#[derive(Debug, Clone)]
pub struct AutoplayMachine {
    phase: AutoplayPhase,
    deadline: Instant,
    timing: AutoplayTiming,
}

impl AutoplayMachine {
    /// Start in `AwaitingFlip` with the first flip one flip interval away
    pub fn new(timing: AutoplayTiming, now: Instant) -> Self {
        Self {
            phase: AutoplayPhase::AwaitingFlip,
            deadline: now + timing.flip_interval,
            timing,
        }
    }

    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Advance the automaton to `now`
    ///
    /// Returns the action to perform if the deadline has been reached.
    pub fn poll(&mut self, now: Instant, auto_walk_enabled: bool) -> Option<AutoAction> {
        if now < self.deadline {
            return None;
        }

        match self.phase {
            AutoplayPhase::AwaitingFlip => {
                if auto_walk_enabled {
                    self.phase = AutoplayPhase::AwaitingWalk;
                }
                self.deadline = now + self.timing.flip_interval;
                Some(AutoAction::Flip)
            }
            AutoplayPhase::AwaitingWalk => {
                self.phase = AutoplayPhase::AwaitingFlip;
                self.deadline = now + self.timing.switch_interval;
                Some(AutoAction::Walk)
            }
        }
    }
}

/// Something the autoplay loop can flip and walk
pub trait AutoplayTarget: Send + Sync + 'static {
    /// Flip the current card
    fn auto_flip(&self);

    /// Move forward one card
    fn auto_walk(&self);
}

/// The two independent autoplay toggles
#[derive(Debug, Default)]
pub struct AutoplayToggles {
    auto_flip: AtomicBool,
    auto_walk: AtomicBool,
}

impl AutoplayToggles {
    pub fn auto_flip_enabled(&self) -> bool {
        self.auto_flip.load(Ordering::SeqCst)
    }

    pub fn auto_walk_enabled(&self) -> bool {
        self.auto_walk.load(Ordering::SeqCst)
    }

    /// Whether the loop should be running
    pub fn any_enabled(&self) -> bool {
        self.auto_flip_enabled() || self.auto_walk_enabled()
    }

    fn set_auto_flip(&self, enabled: bool) {
        self.auto_flip.store(enabled, Ordering::SeqCst);
    }

    fn set_auto_walk(&self, enabled: bool) {
        self.auto_walk.store(enabled, Ordering::SeqCst);
    }

    fn clear(&self) {
        self.set_auto_flip(false);
        self.set_auto_walk(false);
    }
}

/// Running loop instance
struct Worker {
    /// Dropping this closes the channel and wakes the loop
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the autoplay toggles and the background loop
///
/// All methods are meant for the controlling thread. The loop only reads the
/// toggles and calls into the target.
pub struct AutoplayScheduler<T: AutoplayTarget> {
    target: Arc<T>,
    timing: AutoplayTiming,
    toggles: Arc<AutoplayToggles>,
    events: Option<Sender<DeckEvent>>,
    worker: Option<Worker>,
}

impl<T: AutoplayTarget> AutoplayScheduler<T> {
    pub fn new(target: Arc<T>, timing: AutoplayTiming) -> Self {
        Self {
            target,
            timing,
            toggles: Arc::new(AutoplayToggles::default()),
            events: None,
            worker: None,
        }
    }

    /// Emit control-availability events on every toggle change
    pub fn with_events(mut self, events: Sender<DeckEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn timing(&self) -> AutoplayTiming {
        self.timing
    }

    pub fn auto_flip_enabled(&self) -> bool {
        self.toggles.auto_flip_enabled()
    }

    pub fn auto_walk_enabled(&self) -> bool {
        self.toggles.auto_walk_enabled()
    }

    /// Whether a loop thread is alive
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }

    pub fn set_auto_flip(&mut self, enabled: bool) {
        self.toggles.set_auto_flip(enabled);
        self.sync();
    }

    pub fn set_auto_walk(&mut self, enabled: bool) {
        self.toggles.set_auto_walk(enabled);
        self.sync();
    }

    /// Clear both toggles and wait for the loop to finish
    pub fn shutdown(&mut self) {
        self.toggles.clear();
        self.stop_worker();
    }

    fn sync(&mut self) {
        let flip = self.toggles.auto_flip_enabled();
        let walk = self.toggles.auto_walk_enabled();

        if let Some(events) = &self.events {
            let _ = events.send(DeckEvent::autoplay_controls(flip, walk));
        }

        if !(flip || walk) {
            self.stop_worker();
        } else if !self.is_running() {
            // Reap a loop that ended on its own before starting fresh
            self.stop_worker();
            self.start_worker();
        }
    }

    fn start_worker(&mut self) {
        let (stop_tx, stop_rx) = bounded(1);
        let target = Arc::clone(&self.target);
        let toggles = Arc::clone(&self.toggles);
        let timing = self.timing;

        let spawned = thread::Builder::new()
            .name("flashdeck-autoplay".to_string())
            .spawn(move || run_loop(target.as_ref(), &toggles, timing, &stop_rx));

        match spawned {
            Ok(handle) => self.worker = Some(Worker { stop_tx, handle }),
            Err(e) => tracing::error!("Failed to start autoplay thread: {}", e),
        }
    }

    fn stop_worker(&mut self) {
        let Some(Worker { stop_tx, handle }) = self.worker.take() else {
            return;
        };

        drop(stop_tx);
        if handle.join().is_err() {
            tracing::error!("Autoplay thread panicked");
        }
    }
}

impl<T: AutoplayTarget> Drop for AutoplayScheduler<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop<T: AutoplayTarget>(
    target: &T,
    toggles: &AutoplayToggles,
    timing: AutoplayTiming,
    stop_rx: &Receiver<()>,
) {
    let mut machine = AutoplayMachine::new(timing, Instant::now());
    tracing::info!(
        "Autoplay started (flip every {:?}, switch after {:?})",
        timing.flip_interval,
        timing.switch_interval
    );

    loop {
        match stop_rx.recv_timeout(POLL_INTERVAL) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        if !toggles.any_enabled() {
            break;
        }

        let Some(action) = machine.poll(Instant::now(), toggles.auto_walk_enabled()) else {
            continue;
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match action {
            AutoAction::Flip => target.auto_flip(),
            AutoAction::Walk => target.auto_walk(),
        }));

        if outcome.is_err() {
            tracing::error!("Autoplay {:?} failed, stopping autoplay", action);
            break;
        }
    }

    tracing::info!("Autoplay stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn timing_floors_at_two_seconds() {
        let timing = AutoplayTiming::new(0.5, 1.9);
        assert_eq!(timing.flip_interval(), secs(2.0));
        assert_eq!(timing.switch_interval(), secs(2.0));

        let timing = AutoplayTiming::new(f64::NAN, -3.0);
        assert_eq!(timing.flip_interval(), secs(2.0));
        assert_eq!(timing.switch_interval(), secs(2.0));

        let timing = AutoplayTiming::new(2.5, 7.0);
        assert_eq!(timing.flip_interval(), secs(2.5));
        assert_eq!(timing.switch_interval(), secs(7.0));
    }

    #[test]
    fn timing_defaults() {
        let timing = AutoplayTiming::default();
        assert_eq!(timing.flip_interval(), secs(4.0));
        assert_eq!(timing.switch_interval(), secs(3.0));
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut machine = AutoplayMachine::new(AutoplayTiming::new(2.0, 3.0), start);

        assert_eq!(machine.poll(start, true), None);
        assert_eq!(machine.poll(start + secs(1.99), true), None);
        assert_eq!(machine.phase(), AutoplayPhase::AwaitingFlip);
    }

    #[test]
    fn flip_only_keeps_flipping() {
        let start = Instant::now();
        let mut machine = AutoplayMachine::new(AutoplayTiming::new(2.0, 3.0), start);

        let mut now = start;
        let mut actions = Vec::new();
        for _ in 0..4 {
            now += secs(2.0);
            actions.extend(machine.poll(now, false));
        }

        assert_eq!(actions, vec![AutoAction::Flip; 4]);
        assert_eq!(machine.phase(), AutoplayPhase::AwaitingFlip);
    }

    #[test]
    fn flip_and_walk_alternate() {
        let start = Instant::now();
        let timing = AutoplayTiming::new(2.0, 3.0);
        let mut machine = AutoplayMachine::new(timing, start);

        let mut now = start;
        let mut actions = Vec::new();
        for _ in 0..200 {
            now += Duration::from_millis(50);
            actions.extend(machine.poll(now, true));
        }

        assert!(actions.len() >= 4);
        for pair in actions.windows(2) {
            assert_ne!(pair[0], pair[1], "adjacent actions repeat: {:?}", actions);
        }
        assert_eq!(actions[0], AutoAction::Flip);
    }

    #[test]
    fn walk_waits_flip_interval_then_flip_waits_switch_interval() {
        let start = Instant::now();
        let mut machine = AutoplayMachine::new(AutoplayTiming::new(2.0, 5.0), start);

        let flip_at = start + secs(2.0);
        assert_eq!(machine.poll(flip_at, true), Some(AutoAction::Flip));
        assert_eq!(machine.deadline(), flip_at + secs(2.0));
        assert_eq!(machine.phase(), AutoplayPhase::AwaitingWalk);

        let walk_at = flip_at + secs(2.0);
        assert_eq!(machine.poll(walk_at, true), Some(AutoAction::Walk));
        assert_eq!(machine.deadline(), walk_at + secs(5.0));
        assert_eq!(machine.phase(), AutoplayPhase::AwaitingFlip);
    }

    #[derive(Default)]
    struct Recorder {
        actions: Mutex<Vec<AutoAction>>,
    }

    impl AutoplayTarget for Recorder {
        fn auto_flip(&self) {
            self.actions.lock().unwrap().push(AutoAction::Flip);
        }

        fn auto_walk(&self) {
            self.actions.lock().unwrap().push(AutoAction::Walk);
        }
    }

    #[test]
    fn loop_starts_and_stops_with_toggles() {
        let target = Arc::new(Recorder::default());
        let mut scheduler = AutoplayScheduler::new(Arc::clone(&target), AutoplayTiming::default());

        assert!(!scheduler.is_running());

        scheduler.set_auto_flip(true);
        assert!(scheduler.is_running());

        scheduler.set_auto_flip(false);
        assert!(!scheduler.is_running());
        assert!(target.actions.lock().unwrap().is_empty());
    }

    #[test]
    fn loop_is_restartable() {
        let target = Arc::new(Recorder::default());
        let mut scheduler = AutoplayScheduler::new(target, AutoplayTiming::default());

        scheduler.set_auto_walk(true);
        scheduler.set_auto_walk(false);
        scheduler.set_auto_walk(true);
        assert!(scheduler.is_running());

        scheduler.shutdown();
        assert!(!scheduler.is_running());
        assert!(!scheduler.auto_flip_enabled());
        assert!(!scheduler.auto_walk_enabled());
    }

    #[test]
    fn toggle_changes_emit_control_state() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let target = Arc::new(Recorder::default());
        let mut scheduler =
            AutoplayScheduler::new(target, AutoplayTiming::default()).with_events(tx);

        scheduler.set_auto_flip(true);
        scheduler.set_auto_flip(false);

        let events: Vec<DeckEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                DeckEvent::autoplay_controls(true, false),
                DeckEvent::autoplay_controls(false, false),
            ]
        );
    }

    struct Exploding;

    impl AutoplayTarget for Exploding {
        fn auto_flip(&self) {
            panic!("display went away");
        }

        fn auto_walk(&self) {}
    }

    #[test]
    fn failing_tick_ends_loop_without_panicking_caller() {
        let mut scheduler = AutoplayScheduler::new(Arc::new(Exploding), AutoplayTiming::new(2.0, 2.0));
        scheduler.set_auto_flip(true);

        thread::sleep(Duration::from_millis(2400));
        assert!(!scheduler.is_running());

        // A later toggle starts a fresh loop
        scheduler.set_auto_walk(true);
        assert!(scheduler.is_running());
        scheduler.shutdown();
    }
}
