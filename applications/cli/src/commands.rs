//! Text commands read from stdin
//!
//! One command per line. The first word selects the command; `g` takes the
//! rest of the line as the goto text.

use flashdeck_core::{Direction, NavTarget};

/// A parsed front-end command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(NavTarget),
    Flip,
    Goto(String),
    ToggleAutoFlip,
    ToggleAutoWalk,
    ReplaySound,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `None` for blank or unknown input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "n" | "next" => Command::Navigate(NavTarget::Relative(Direction::Forward)),
            "p" | "prev" => Command::Navigate(NavTarget::Relative(Direction::Backward)),
            "s" | "start" => Command::Navigate(NavTarget::JumpStart),
            "e" | "end" => Command::Navigate(NavTarget::JumpEnd),
            "f" | "flip" => Command::Flip,
            "g" | "goto" => Command::Goto(rest.to_string()),
            "a" => Command::ToggleAutoFlip,
            "w" => Command::ToggleAutoWalk,
            "r" | "sound" => Command::ReplaySound,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => return None,
        };

        Some(command)
    }
}

pub const HELP: &str = "\
n next   p previous   s start   e end
f flip   g <id> goto  r play sound
a toggle auto-flip    w toggle auto-walk
q quit";
