//! Discrete user commands and their text form

use crate::game_of_life::LifeError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Keyboard-equivalent actions understood by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Flip between paused and running
    TogglePlay,
    /// Advance exactly one generation
    Step,
    Clear,
    /// Fill the board at random; `None` uses the configured density
    Randomize(Option<f64>),
    /// Save to the given file, or the default pattern file
    Save(Option<PathBuf>),
    /// Load from the given file, or the default pattern file
    Load(Option<PathBuf>),
    Resize(i32, i32),
    /// Let time pass on the driving clock
    Tick(Duration),
    Quit,
}

impl FromStr for Command {
    type Err = LifeError;

    /// Parse one line such as `n`, `space`, `s glider.txt` or `resize 80 40`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unknown = || LifeError::UnknownCommand(line.trim().to_string());
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(unknown());
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("space" | "p" | "play" | "pause", []) => Command::TogglePlay,
            ("n" | "step", []) => Command::Step,
            ("c" | "clear", []) => Command::Clear,
            ("r" | "random" | "randomize", []) => Command::Randomize(None),
            ("r" | "random" | "randomize", [density]) => {
                Command::Randomize(Some(density.parse().map_err(|_| unknown())?))
            }
            ("s" | "save", []) => Command::Save(None),
            ("s" | "save", [file]) => Command::Save(Some(PathBuf::from(*file))),
            ("l" | "load", []) => Command::Load(None),
            ("l" | "load", [file]) => Command::Load(Some(PathBuf::from(*file))),
            ("resize", [w, h]) => Command::Resize(
                w.parse().map_err(|_| unknown())?,
                h.parse().map_err(|_| unknown())?,
            ),
            ("t" | "tick", [millis]) => {
                Command::Tick(Duration::from_millis(millis.parse().map_err(|_| unknown())?))
            }
            ("q" | "quit" | "exit", []) => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

/// One-line summary of the key bindings
pub const CONTROLS: &str =
    "Space: Play/Pause | N: Step | C: Clear | R: Random | S: Save | L: Load | Q: Quit";
