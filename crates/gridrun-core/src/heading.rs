//! Compass headings and their rotation order.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Direction a vehicle is facing.
///
/// Headings form a cycle in the order North, East, South, West. Rotating
/// right advances one position through that cycle and rotating left
/// retreats one, both wrapping modulo 4.
///
/// # Examples
///
/// ```
/// use gridrun_core::Heading;
///
/// assert_eq!(Heading::North.right(), Heading::East);
/// assert_eq!(Heading::North.left(), Heading::West);
/// assert_eq!("s".parse::<Heading>().unwrap(), Heading::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing +y.
    North = 0,
    /// Facing +x.
    East = 1,
    /// Facing -y.
    South = 2,
    /// Facing -x.
    West = 3,
}

impl Heading {
    /// All headings in rotation order.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    const fn from_ordinal(n: u8) -> Self {
        match n % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The heading after a quarter turn clockwise.
    pub const fn right(self) -> Self {
        Self::from_ordinal(self as u8 + 1)
    }

    /// The heading after a quarter turn anticlockwise.
    pub const fn left(self) -> Self {
        Self::from_ordinal(self as u8 + 3)
    }

    /// Returns the `(dx, dy)` unit step for this heading.
    pub const fn unit_offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Single-letter form used in input and reports.
    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a single heading letter, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, ParseError> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            _ => Err(ParseError::InvalidHeading {
                found: c.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(ParseError::InvalidHeading {
                found: trimmed.to_string(),
            }),
        }
    }
}
