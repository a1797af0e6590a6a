//! flashdeck terminal front-end
//!
//! Reads single-letter commands from a line source and drives a
//! [`StudySession`] and its [`AutoplayScheduler`]. Rendering happens
//! elsewhere, on whatever drains the session's event channel.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod display;

use commands::{Command, HELP};
use flashdeck_playback::{AutoplayScheduler, StudySession};
use std::io::{self, BufRead, Write};

pub const AUTO_FLIP_LOCKED: &str = "auto-flip is locked while auto-walk is on";
pub const AUTO_WALK_LOCKED: &str = "auto-walk is locked while auto-flip is on";

/// Run the command loop until `q` or end of input
pub fn run_commands<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &StudySession,
    autoplay: &mut AutoplayScheduler<StudySession>,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let Some(command) = Command::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "Unknown command {:?} (h for help)", line.trim())?;
            }
            continue;
        };

        match command {
            Command::Navigate(target) => {
                session.move_to(target);
            }
            Command::Flip => {
                session.flip();
            }
            Command::Goto(text) => {
                if session.goto_index(&text).is_none() && !text.is_empty() {
                    writeln!(out, "Card {:?} not found", text)?;
                }
            }
            // Each toggle's control is locked while the other one is on
            Command::ToggleAutoFlip => {
                if autoplay.auto_walk_enabled() {
                    writeln!(out, "{}", AUTO_FLIP_LOCKED)?;
                } else {
                    let enabled = !autoplay.auto_flip_enabled();
                    autoplay.set_auto_flip(enabled);
                }
            }
            Command::ToggleAutoWalk => {
                if autoplay.auto_flip_enabled() {
                    writeln!(out, "{}", AUTO_WALK_LOCKED)?;
                } else {
                    let enabled = !autoplay.auto_walk_enabled();
                    autoplay.set_auto_walk(enabled);
                }
            }
            Command::ReplaySound => session.replay_sound(),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
