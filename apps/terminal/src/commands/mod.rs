//! # Commands Module
//!
//! Every action the user can type, one per line.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! └── bill.rs     ◄─── Handlers that touch the bill session
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "tip 0.5"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "tip 0.5".parse::<Command>()  ──► Command::Tip(0.5)                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut session, &config, command)                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  bill::move_tip_slider(&mut session, 0.5)                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome::Render ──► screen redrawn                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bill;

use std::str::FromStr;

use thiserror::Error;

use crate::error::AppResult;
use crate::state::{BillSession, ConfigState};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the bill text (everything after the first space, verbatim).
    Bill(String),
    /// Commit the bill text, like pressing "done" on a keyboard.
    Submit,
    /// One more person.
    Increment,
    /// One fewer person.
    Decrement,
    /// Drag the tip slider to a raw position.
    Tip(f32),
    /// Redraw the screen.
    Show,
    /// Print the current summary as JSON.
    Json,
    /// Start over with a fresh screen.
    Reset,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Command parsing errors.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs a value")]
    MissingArgument { command: String },

    #[error("'{value}' is not a valid value for '{command}'")]
    InvalidArgument { command: String, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            // The bill text keeps its spacing; validation decides what to make of it.
            "bill" => Ok(Command::Bill(rest.to_string())),
            "submit" | "done" => Ok(Command::Submit),
            "+" | "inc" => Ok(Command::Increment),
            "-" | "dec" => Ok(Command::Decrement),
            "tip" => {
                let value = rest.trim();
                if value.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "tip".to_string(),
                    });
                }
                value
                    .parse::<f32>()
                    .map(Command::Tip)
                    .map_err(|_| CommandError::InvalidArgument {
                        command: "tip".to_string(),
                        value: value.to_string(),
                    })
            }
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Redraw the screen.
    Render,
    /// Print this text as-is.
    Print(String),
    /// Stop the loop.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  bill <amount>   type the bill amount (whole numbers only)
  submit          commit the bill amount
  + | inc         add a person to the split
  - | dec         remove a person from the split
  tip <0.0-1.0>   move the tip slider
  show            redraw the screen
  json            print the current summary as JSON
  reset           start over
  help            show this list
  quit            leave";

/// Routes a command to its handler.
pub fn dispatch(
    session: &mut BillSession,
    config: &ConfigState,
    command: Command,
) -> AppResult<Outcome> {
    match command {
        Command::Bill(text) => {
            bill::set_bill_text(session, text);
            Ok(Outcome::Render)
        }
        Command::Submit => {
            bill::submit_bill(session)?;
            Ok(Outcome::Render)
        }
        Command::Increment => {
            bill::increment_split(session);
            Ok(Outcome::Render)
        }
        Command::Decrement => {
            bill::decrement_split(session);
            Ok(Outcome::Render)
        }
        Command::Tip(raw) => {
            bill::move_tip_slider(session, raw);
            Ok(Outcome::Render)
        }
        Command::Show => Ok(Outcome::Render),
        Command::Json => bill::summary_json(session, config).map(Outcome::Print),
        Command::Reset => {
            bill::reset_session(session);
            Ok(Outcome::Render)
        }
        Command::Help => Ok(Outcome::Print(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("submit".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("+".parse::<Command>(), Ok(Command::Increment));
        assert_eq!("dec".parse::<Command>(), Ok(Command::Decrement));
        assert_eq!("  SHOW".parse::<Command>(), Ok(Command::Show));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_bill_keeps_spacing() {
        assert_eq!(
            "bill  125 ".parse::<Command>(),
            Ok(Command::Bill(" 125 ".to_string()))
        );
        assert_eq!("bill".parse::<Command>(), Ok(Command::Bill(String::new())));
    }

    #[test]
    fn test_parse_tip() {
        assert_eq!("tip 0.5".parse::<Command>(), Ok(Command::Tip(0.5)));
        assert_eq!(
            "tip".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "tip".to_string()
            })
        );
        assert_eq!(
            "tip lots".parse::<Command>(),
            Err(CommandError::InvalidArgument {
                command: "tip".to_string(),
                value: "lots".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_dispatch_flow() {
        let mut session = BillSession::new();
        let config = ConfigState::default();

        for command in [
            Command::Bill("200".to_string()),
            Command::Submit,
            Command::Tip(0.5),
            Command::Increment,
            Command::Increment,
            Command::Increment,
        ] {
            assert_eq!(
                dispatch(&mut session, &config, command).unwrap(),
                Outcome::Render
            );
        }

        assert_eq!(session.summary().total_per_person, 75.0);
        assert_eq!(
            dispatch(&mut session, &config, Command::Quit).unwrap(),
            Outcome::Quit
        );
    }

    #[test]
    fn test_dispatch_submit_invalid() {
        let mut session = BillSession::new();
        let config = ConfigState::default();
        dispatch(&mut session, &config, Command::Bill("abc".to_string())).unwrap();

        let err = dispatch(&mut session, &config, Command::Submit).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_help_lists_commands() {
        let mut session = BillSession::new();
        let config = ConfigState::default();
        match dispatch(&mut session, &config, Command::Help).unwrap() {
            Outcome::Print(text) => {
                assert!(text.contains("bill <amount>"));
                assert!(text.contains("tip <0.0-1.0>"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
