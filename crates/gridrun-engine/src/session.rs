//! One grid plus one simulator, run at most once.
//!
//! [`Session`] is the unit the CLI drives: vehicles are added one at a
//! time (each addition validated and applied atomically), then the whole
//! fleet is run in a single pass and the results read back as report
//! lines.

use std::error::Error;
use std::fmt;

use gridrun_core::{parse_program, Coordinate, GridError, Heading, ParseError, VehicleId};
use gridrun_space::Grid;
use indexmap::IndexMap;
use tracing::debug;

use crate::config::{ConfigError, ScenarioConfig};
use crate::metrics::RunMetrics;
use crate::report::{self, RosterEntry, VehicleOutcome};
use crate::simulator::Simulator;

// ── SessionError ───────────────────────────────────────────────────

/// Errors returned by [`Session`] operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The scenario failed validation.
    Config(ConfigError),
    /// Grid construction or placement failed.
    Grid(GridError),
    /// A program failed to parse.
    Parse(ParseError),
    /// A vehicle name was blank.
    EmptyName,
    /// The session has already been run.
    AlreadyRun,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::EmptyName => write!(f, "car name must not be empty"),
            Self::AlreadyRun => write!(f, "simulation has already been run"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParseError> for SessionError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ── Session ────────────────────────────────────────────────────────

/// A field, its vehicles and their programs.
///
/// # Examples
///
/// ```
/// use gridrun_core::{Coordinate, Heading};
/// use gridrun_engine::Session;
///
/// let mut session = Session::new(10, 10).unwrap();
/// session.add_vehicle("A", Coordinate::new(1, 2), Heading::North, "FFRFFFFFF").unwrap();
/// session.add_vehicle("B", Coordinate::new(7, 8), Heading::West, "FFLFFFFFFFF").unwrap();
/// session.run().unwrap();
///
/// let lines: Vec<String> = session.outcomes().iter().map(ToString::to_string).collect();
/// assert_eq!(lines[0], "- A, collides with B at (5,4) at step 7");
/// assert_eq!(lines[1], "- B, collides with A at (5,4) at step 7");
/// ```
pub struct Session {
    grid: Grid,
    simulator: Simulator,
    roster: IndexMap<VehicleId, RosterEntry>,
    last_metrics: Option<RunMetrics>,
}

impl Session {
    /// Create a session over an empty `width x height` field.
    pub fn new(width: i32, height: i32) -> Result<Self, SessionError> {
        let grid = Grid::new(width, height)?;
        debug!(width, height, "session created");
        Ok(Self {
            grid,
            simulator: Simulator::new(),
            roster: IndexMap::new(),
            last_metrics: None,
        })
    }

    /// Validate `config` and build a session with all of its vehicles.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let mut session = Self::new(config.width, config.height)?;
        for v in &config.vehicles {
            session.add_vehicle(v.name.as_str(), v.position, v.heading, &v.program)?;
        }
        Ok(session)
    }

    /// Add a vehicle and register its program.
    ///
    /// The program is parsed before the grid is touched, so any error
    /// leaves the session exactly as it was.
    pub fn add_vehicle(
        &mut self,
        name: &str,
        position: Coordinate,
        heading: Heading,
        program: &str,
    ) -> Result<VehicleId, SessionError> {
        if self.has_run() {
            return Err(SessionError::AlreadyRun);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let kinds = parse_program(program)?;
        let id = self.grid.add_vehicle(name, position, heading)?;
        self.simulator.register_commands(id, &kinds);

        let program: String = kinds.iter().map(|k| k.as_char()).collect();
        debug!(
            vehicle = name,
            %position,
            %heading,
            commands = kinds.len(),
            "vehicle added"
        );
        self.roster.insert(
            id,
            RosterEntry {
                name: name.to_string(),
                position,
                heading,
                program,
            },
        );
        Ok(id)
    }

    /// Run every registered program. A session runs at most once.
    pub fn run(&mut self) -> Result<RunMetrics, SessionError> {
        if self.has_run() {
            return Err(SessionError::AlreadyRun);
        }
        let metrics = self.simulator.run(&mut self.grid);
        self.last_metrics = Some(metrics.clone());
        Ok(metrics)
    }

    /// Whether [`run()`](Self::run) has completed.
    pub fn has_run(&self) -> bool {
        self.last_metrics.is_some()
    }

    /// The field and its vehicles.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The registered steps.
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Program registered for `id`, upper-cased.
    pub fn program_of(&self, id: VehicleId) -> Option<&str> {
        self.roster.get(&id).map(|e| e.program.as_str())
    }

    /// Starting placements and programs, in registration order.
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.roster.values().cloned().collect()
    }

    /// Current state of every vehicle, in registration order.
    pub fn outcomes(&self) -> Vec<VehicleOutcome> {
        report::outcomes(&self.grid)
    }

    /// Metrics of the completed run, if any.
    pub fn last_metrics(&self) -> Option<&RunMetrics> {
        self.last_metrics.as_ref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("vehicles", &self.grid.len())
            .field("steps", &self.simulator.step_count())
            .field("has_run", &self.has_run())
            .finish()
    }
}
