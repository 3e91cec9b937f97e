//! Debug control surface: text commands driving the simulation

use std::str::FromStr;
use thiserror::Error;

/// Action requested from the debug surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    /// Spawn a sphere of random radius
    AddSphere,
    /// Spawn a box at a random spot
    AddBox,
    /// Remove every spawned object
    Reset,
}

/// Message accepted by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMessage {
    Debug(DebugAction),
    /// Output surface resized
    Resize { width: u32, height: u32 },
    /// Stop the loop
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0:?}")]
pub struct ParseCommandError(pub String);

impl FromStr for DebugAction {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" | "add_sphere" | "addsphere" => Ok(Self::AddSphere),
            "box" | "add_box" | "addbox" => Ok(Self::AddBox),
            "reset" => Ok(Self::Reset),
            _ => Err(ParseCommandError(s.trim().to_string())),
        }
    }
}

impl FromStr for ControlMessage {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().map(str::to_ascii_lowercase);
        match command.as_deref() {
            Some("quit" | "exit") => Ok(Self::Quit),
            Some("resize") => {
                let mut dimension = || words.next().and_then(|w| w.parse::<u32>().ok());
                match (dimension(), dimension()) {
                    (Some(width), Some(height)) => Ok(Self::Resize { width, height }),
                    _ => Err(ParseCommandError(s.trim().to_string())),
                }
            }
            _ => s.parse().map(Self::Debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("sphere".parse(), Ok(DebugAction::AddSphere));
        assert_eq!(" Box \n".parse(), Ok(DebugAction::AddBox));
        assert_eq!("reset".parse(), Ok(DebugAction::Reset));
        assert!("explode".parse::<DebugAction>().is_err());
    }

    #[test]
    fn test_parse_control_messages() {
        assert_eq!("quit".parse(), Ok(ControlMessage::Quit));
        assert_eq!(
            "resize 800 600".parse(),
            Ok(ControlMessage::Resize {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            "box".parse(),
            Ok(ControlMessage::Debug(DebugAction::AddBox))
        );
        assert!("resize 800".parse::<ControlMessage>().is_err());
        assert!("".parse::<ControlMessage>().is_err());
    }

    #[test]
    fn test_control_words_ignore_case() {
        assert_eq!("QUIT".parse(), Ok(ControlMessage::Quit));
        assert_eq!(" Exit ".parse(), Ok(ControlMessage::Quit));
        assert_eq!(
            "Resize 1024 768".parse(),
            Ok(ControlMessage::Resize {
                width: 1024,
                height: 768
            })
        );
        assert_eq!(
            "RESET".parse(),
            Ok(ControlMessage::Debug(DebugAction::Reset))
        );
    }
}
