//! gridrun: a deterministic multi-vehicle grid simulator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridrun sub-crates. For most users, adding `gridrun` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridrun::prelude::*;
//!
//! let mut session = Session::new(10, 10).unwrap();
//! session
//!     .add_vehicle("A", Coordinate::new(1, 2), Heading::North, "FFRFFFFFF")
//!     .unwrap();
//! session
//!     .add_vehicle("B", Coordinate::new(7, 8), Heading::West, "FFLFFFFFFFF")
//!     .unwrap();
//!
//! let metrics = session.run().unwrap();
//! assert_eq!(metrics.vehicles_frozen, 2);
//!
//! for line in session.outcomes() {
//!     println!("{line}");
//! }
//! // - A, collides with B at (5,4) at step 7
//! // - B, collides with A at (5,4) at step 7
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridrun-core` | IDs, coordinates, headings, commands, errors |
//! | [`space`] | `gridrun-space` | The bounded grid and its vehicles |
//! | [`engine`] | `gridrun-engine` | Scheduler, sessions, scenarios and reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`gridrun-core`).
///
/// Contains [`types::Coordinate`], [`types::Heading`], command kinds,
/// [`types::GridError`] and [`types::ParseError`].
pub use gridrun_core as types;

/// The field and its vehicles (`gridrun-space`).
///
/// [`space::Grid`] owns every vehicle and the occupancy map used for
/// collision detection.
pub use gridrun_space as space;

/// Simulation engine (`gridrun-engine`).
///
/// [`engine::Simulator`] for replaying registered steps over a grid,
/// [`engine::Session`] for the validated run-once workflow.
pub use gridrun_engine as engine;

/// Common imports for typical gridrun usage.
///
/// ```rust
/// use gridrun::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridrun_core::{CommandKind, Coordinate, Heading, StepIndex, VehicleId};

    // Errors
    pub use gridrun_core::{GridError, ParseError};

    // Space
    pub use gridrun_space::{Grid, Vehicle};

    // Engine
    pub use gridrun_engine::{
        ConfigError, RunMetrics, ScenarioConfig, Session, SessionError, Simulator,
        VehicleOutcome, VehicleSpec,
    };
}
