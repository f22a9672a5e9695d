//! Error types for scenario assembly.
//!
//! Organized by subsystem: [`GridError`] for field construction and
//! vehicle placement, [`ParseError`] for textual headings, programs and
//! scenario lines. Simulation itself never fails; boundary hits and frozen
//! vehicles are absorbed as no-ops, so every error here is raised before
//! the offending entity enters the simulation state.

use crate::id::Coordinate;
use std::error::Error;
use std::fmt;

/// Errors from grid construction and vehicle placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero or negative.
    InvalidDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coordinate,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
    /// Another vehicle already occupies the coordinate.
    PositionOccupied {
        /// The contested coordinate.
        coord: Coordinate,
        /// Name of the vehicle already there.
        occupant: String,
    },
    /// A vehicle with this name already exists.
    DuplicateIdentity {
        /// The reused name.
        name: String,
    },
    /// No vehicle with this name exists.
    UnknownVehicle {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "dimensions must be positive, got {width} x {height}")
            }
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "position {coord} is outside the {width} x {height} field")
            }
            Self::PositionOccupied { coord, occupant } => {
                write!(f, "position {coord} is already occupied by {occupant}")
            }
            Self::DuplicateIdentity { name } => {
                write!(f, "a car named '{name}' already exists")
            }
            Self::UnknownVehicle { name } => write!(f, "no car named '{name}'"),
        }
    }
}

impl Error for GridError {}

/// Errors from parsing textual input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Heading is not one of `N`, `E`, `S`, `W`.
    InvalidHeading {
        /// The rejected input.
        found: String,
    },
    /// A program contains a character other than `F`, `L`, `R`.
    InvalidCommandCharacter {
        /// The rejected character.
        found: char,
        /// Its index within the program.
        position: usize,
    },
    /// Input has the wrong number of whitespace-separated fields.
    FieldCount {
        /// How many fields were expected.
        expected: usize,
        /// How many were found.
        found: usize,
    },
    /// A number could not be parsed as an integer.
    InvalidInteger {
        /// The rejected input.
        found: String,
    },
    /// A scenario line has the wrong shape.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeading { found } => {
                write!(f, "invalid direction '{found}', expected one of N, E, S, W")
            }
            Self::InvalidCommandCharacter { found, position } => {
                write!(
                    f,
                    "invalid command '{found}' at position {position}, expected one of F, L, R"
                )
            }
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} values separated by spaces, got {found}")
            }
            Self::InvalidInteger { found } => write!(f, "'{found}' is not an integer"),
            Self::MalformedLine { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_messages_name_the_problem() {
        let e = GridError::PositionOccupied {
            coord: Coordinate::new(1, 2),
            occupant: "A".into(),
        };
        assert_eq!(e.to_string(), "position (1,2) is already occupied by A");

        let e = GridError::OutOfBounds {
            coord: Coordinate::new(10, 0),
            width: 10,
            height: 10,
        };
        assert_eq!(e.to_string(), "position (10,0) is outside the 10 x 10 field");
    }

    #[test]
    fn parse_error_messages_list_valid_choices() {
        let e = ParseError::InvalidCommandCharacter {
            found: 'X',
            position: 2,
        };
        assert!(e.to_string().contains("F, L, R"));
        let e = ParseError::InvalidHeading { found: "Q".into() };
        assert!(e.to_string().contains("N, E, S, W"));
    }
}
