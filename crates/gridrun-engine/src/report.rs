//! Human-readable listings of a session's vehicles.
//!
//! Both listings are plain data with a `Display` impl that renders one
//! line, so callers can collect, compare, or print them.

use std::fmt;

use gridrun_core::{Coordinate, Heading, StepIndex};
use gridrun_space::{Grid, Vehicle};

/// A vehicle as registered: starting placement and program.
///
/// Captured when the vehicle is added, so it keeps showing the start
/// state after a run has moved the vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    /// Vehicle name.
    pub name: String,
    /// Starting cell.
    pub position: Coordinate,
    /// Starting heading.
    pub heading: Heading,
    /// Registered program, upper-cased.
    pub program: String,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}, {} {}, {}",
            self.name, self.position, self.heading, self.program
        )
    }
}

/// Final state of one vehicle after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VehicleOutcome {
    /// The vehicle never collided.
    Active {
        /// Vehicle name.
        name: String,
        /// Final cell.
        position: Coordinate,
        /// Final heading.
        heading: Heading,
    },
    /// The vehicle was frozen by a collision.
    Collided {
        /// Vehicle name.
        name: String,
        /// Other occupants of its cell, in arrival order.
        partners: Vec<String>,
        /// Cell where it froze.
        position: Coordinate,
        /// Step at which it froze, 0-based.
        step: Option<StepIndex>,
    },
}

impl VehicleOutcome {
    /// Build the outcome of `vehicle` from the grid it lives in.
    pub fn of(grid: &Grid, vehicle: &Vehicle) -> Self {
        if !vehicle.is_collided() {
            return Self::Active {
                name: vehicle.name().to_string(),
                position: vehicle.position(),
                heading: vehicle.heading(),
            };
        }
        let partners = grid
            .partners_of(vehicle.id())
            .iter()
            .filter_map(|id| grid.vehicle(*id))
            .map(|v| v.name().to_string())
            .collect();
        Self::Collided {
            name: vehicle.name().to_string(),
            partners,
            position: vehicle.position(),
            step: vehicle.freeze_step(),
        }
    }

    /// Vehicle name.
    pub fn name(&self) -> &str {
        match self {
            Self::Active { name, .. } | Self::Collided { name, .. } => name,
        }
    }

    /// Whether the vehicle ended the run frozen.
    pub fn is_collided(&self) -> bool {
        matches!(self, Self::Collided { .. })
    }
}

impl fmt::Display for VehicleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active {
                name,
                position,
                heading,
            } => write!(f, "- {name}, {position} {heading}"),
            Self::Collided {
                name,
                partners,
                position,
                step,
            } => {
                write!(f, "- {name}, collides with {} at {position}", partners.join(", "))?;
                if let Some(step) = step {
                    write!(f, " at step {}", step.ordinal())?;
                }
                Ok(())
            }
        }
    }
}

/// Outcome of every vehicle of `grid`, in registration order.
pub fn outcomes(grid: &Grid) -> Vec<VehicleOutcome> {
    grid.vehicles().map(|v| VehicleOutcome::of(grid, v)).collect()
}
