// src/command.rs
//
// Line-oriented commands read by the preview binary.

use std::fmt;

use crate::config::PresetList;
use crate::grid::{GridField, Mode};
use crate::session::SessionEvent;

pub const HELP: &str = "\
commands:
  cell-size <value>   set the cell size in pixels
  cols <value>        set the column count
  rows <value>        set the row count
  preset <C>x<R>      apply a size preset, e.g. preset 30x20
  mode random|single  select the maze mode
  auto on|off         toggle auto-preview
  submit              render now
  reset               restore the defaults
  show                print the current state
  help                print this text
  quit                exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(SessionEvent),
    Show,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument { command: &'static str, value: String },
    UnknownPreset(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command '{}' (try 'help')", word),
            CommandError::MissingArgument(command) => {
                write!(f, "'{}' needs an argument", command)
            }
            CommandError::InvalidArgument { command, value } => {
                write!(f, "'{}' does not accept '{}'", command, value)
            }
            CommandError::UnknownPreset(label) => write!(f, "no preset named '{}'", label),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses one line. Field values are passed on raw so the store can coerce
/// them; an empty value is allowed and means zero.
pub fn parse_command(line: &str, presets: &PresetList) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word {
        "" => return Err(CommandError::Empty),
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "cell-size" | "cellsize" => field_event(GridField::CellSize, rest),
        "cols" => field_event(GridField::Cols, rest),
        "rows" => field_event(GridField::Rows, rest),
        "preset" => {
            let label = required("preset", rest)?;
            let preset = presets
                .find(label)
                .ok_or_else(|| CommandError::UnknownPreset(label.to_string()))?;
            SessionEvent::ApplyPreset(preset)
        }
        "mode" => {
            let value = required("mode", rest)?;
            let mode = value
                .parse::<Mode>()
                .map_err(|_| CommandError::InvalidArgument {
                    command: "mode",
                    value: value.to_string(),
                })?;
            SessionEvent::SetMode(mode)
        }
        "auto" => {
            let value = required("auto", rest)?;
            let enabled = match value {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                other => {
                    return Err(CommandError::InvalidArgument {
                        command: "auto",
                        value: other.to_string(),
                    })
                }
            };
            SessionEvent::SetAutoPreview(enabled)
        }
        "submit" | "generate" => SessionEvent::Submit,
        "reset" => SessionEvent::Reset,
        "quit" | "exit" => SessionEvent::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Event(event))
}

fn field_event(field: GridField, raw: &str) -> SessionEvent {
    SessionEvent::SetField {
        field,
        raw: raw.to_string(),
    }
}

fn required<'l>(command: &'static str, rest: &'l str) -> Result<&'l str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}
