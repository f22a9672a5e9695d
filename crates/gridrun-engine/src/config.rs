//! Scenario configuration, parsing and validation.
//!
//! [`ScenarioConfig`] is the declarative input for building a
//! [`Session`](crate::Session): field dimensions plus vehicles in
//! registration order. [`validate()`](ScenarioConfig::validate) checks
//! every placement and program up front without touching a live session.
//!
//! The text format read by [`ScenarioConfig::parse`] is line-based:
//!
//! ```text
//! # width height
//! 10 10
//! # name x y heading [program]
//! A 1 2 N FFRFFFFFF
//! B 7 8 W FFLFFFFFFFF
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::error::Error;
use std::fmt;

use gridrun_core::{parse_program, Coordinate, GridError, Heading, ParseError};
use gridrun_space::Grid;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ScenarioConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Dimensions or a placement are invalid.
    Grid(GridError),
    /// A vehicle program is invalid.
    Parse(ParseError),
    /// A vehicle has a blank name.
    EmptyName {
        /// Position of the vehicle in the scenario.
        index: usize,
    },
    /// The scenario lists no vehicles.
    NoVehicles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::EmptyName { index } => write!(f, "vehicle #{} has an empty name", index + 1),
            Self::NoVehicles => write!(f, "scenario lists no vehicles"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ── VehicleSpec ────────────────────────────────────────────────────

/// One vehicle of a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleSpec {
    /// Unique name.
    pub name: String,
    /// Starting cell.
    pub position: Coordinate,
    /// Starting heading.
    pub heading: Heading,
    /// Command letters, one per step.
    pub program: String,
}

impl VehicleSpec {
    /// Convenience constructor.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<Coordinate>,
        heading: Heading,
        program: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            heading,
            program: program.into(),
        }
    }
}

// ── ScenarioConfig ─────────────────────────────────────────────────

/// Complete description of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Field width.
    pub width: i32,
    /// Field height.
    pub height: i32,
    /// Vehicles in registration order.
    pub vehicles: Vec<VehicleSpec>,
}

impl ScenarioConfig {
    /// An empty field of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            vehicles: Vec::new(),
        }
    }

    /// Builder-style vehicle addition.
    pub fn with_vehicle(mut self, vehicle: VehicleSpec) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Validate all structural invariants.
    ///
    /// Checks, in vehicle order, names, placements (against bounds,
    /// earlier vehicles and earlier names) and programs. This is a pure
    /// validation pass over a scratch grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut scratch = Grid::new(self.width, self.height)?;
        if self.vehicles.is_empty() {
            return Err(ConfigError::NoVehicles);
        }
        for (index, v) in self.vehicles.iter().enumerate() {
            if v.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            parse_program(&v.program)?;
            scratch.add_vehicle(v.name.as_str(), v.position, v.heading)?;
        }
        Ok(())
    }

    /// Parse the line-based scenario format described in the module docs.
    ///
    /// Only the shape of each line is checked here; placement and program
    /// rules are checked by [`validate()`](Self::validate).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let Some((first, header)) = lines.next() else {
            return Err(ParseError::MalformedLine {
                line: 1,
                reason: "missing 'width height' header".into(),
            });
        };
        let (width, height) = parse_dimensions(header).map_err(|e| at_line(first, e))?;

        let mut config = Self::new(width, height);
        for (line, text) in lines {
            config
                .vehicles
                .push(parse_vehicle_line(text).map_err(|e| at_line(line, e))?);
        }
        Ok(config)
    }
}

fn at_line(line: usize, e: ParseError) -> ParseError {
    ParseError::MalformedLine {
        line,
        reason: e.to_string(),
    }
}

fn parse_vehicle_line(text: &str) -> Result<VehicleSpec, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(ParseError::FieldCount {
            expected: 5,
            found: fields.len(),
        });
    }
    let (position, heading) = parse_placement(&fields[1..4].join(" "))?;
    Ok(VehicleSpec {
        name: fields[0].to_string(),
        position,
        heading,
        program: fields.get(4).copied().unwrap_or_default().to_ascii_uppercase(),
    })
}

fn parse_int(token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        found: token.to_string(),
    })
}

/// Parse `"W H"` into a width and height.
///
/// Sign is not checked here; [`Grid::new`] rejects non-positive sizes.
pub fn parse_dimensions(input: &str) -> Result<(i32, i32), ParseError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    let [w, h] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            expected: 2,
            found: fields.len(),
        });
    };
    Ok((parse_int(w)?, parse_int(h)?))
}

/// Parse `"X Y D"` into a starting cell and heading.
///
/// Bounds and occupancy are not checked here; see
/// [`Grid::add_vehicle`].
pub fn parse_placement(input: &str) -> Result<(Coordinate, Heading), ParseError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    let [x, y, d] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            expected: 3,
            found: fields.len(),
        });
    };
    let coord = Coordinate::new(parse_int(x)?, parse_int(y)?);
    Ok((coord, d.parse()?))
}
