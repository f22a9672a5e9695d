//! Command kinds and vehicle-bound commands.

use crate::error::ParseError;
use crate::id::VehicleId;
use std::fmt;

/// One unit operation a vehicle can perform in a single step.
///
/// The set is closed: execution dispatches on this enum with a single
/// `match`, there is no command trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Advance one cell in the current heading (`F`).
    Forward,
    /// Quarter turn clockwise (`R`).
    RotateRight,
    /// Quarter turn anticlockwise (`L`).
    RotateLeft,
}

impl CommandKind {
    /// Parse a command letter, case-insensitively.
    ///
    /// `position` is the index of the character in its program and is only
    /// used to build the error.
    pub fn from_char(c: char, position: usize) -> Result<Self, ParseError> {
        match c.to_ascii_uppercase() {
            'F' => Ok(Self::Forward),
            'R' => Ok(Self::RotateRight),
            'L' => Ok(Self::RotateLeft),
            _ => Err(ParseError::InvalidCommandCharacter { found: c, position }),
        }
    }

    /// Single-letter form used in programs.
    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::RotateRight => 'R',
            Self::RotateLeft => 'L',
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A command bound to the vehicle it drives.
///
/// Commands are created once when a program is registered and are
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use gridrun_core::{Command, CommandKind, VehicleId};
///
/// let cmd = Command::new(CommandKind::Forward, VehicleId(0));
/// assert_eq!(cmd.kind, CommandKind::Forward);
/// assert_eq!(cmd.vehicle, VehicleId(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    /// The operation to perform.
    pub kind: CommandKind,
    /// The vehicle the operation applies to.
    pub vehicle: VehicleId,
}

impl Command {
    /// Bind `kind` to `vehicle`.
    pub const fn new(kind: CommandKind, vehicle: VehicleId) -> Self {
        Self { kind, vehicle }
    }
}

/// Parse a whole program such as `"FFRFF"` into command kinds.
///
/// Surrounding whitespace is ignored and letters are case-insensitive.
/// The whole string is validated before anything is returned, so a
/// program with a bad character yields no commands at all. An empty
/// program is valid and yields an empty list.
///
/// # Examples
///
/// ```
/// use gridrun_core::{parse_program, CommandKind};
///
/// let kinds = parse_program("fRl").unwrap();
/// assert_eq!(
///     kinds,
///     vec![CommandKind::Forward, CommandKind::RotateRight, CommandKind::RotateLeft]
/// );
/// assert!(parse_program("FX").is_err());
/// ```
pub fn parse_program(program: &str) -> Result<Vec<CommandKind>, ParseError> {
    program
        .trim()
        .chars()
        .enumerate()
        .map(|(i, c)| CommandKind::from_char(c, i))
        .collect()
}
