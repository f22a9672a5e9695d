//! Simulation engine for gridrun.
//!
//! Provides the [`Simulator`] that replays per-vehicle programs step by
//! step over a [`Grid`](gridrun_space::Grid), checking for collisions
//! after every single command, and the [`Session`] that bundles one grid
//! and one simulator into a validated, run-once unit with textual
//! reports.
//!
//! Execution is single-threaded and deterministic: the same scenario
//! always produces the same final state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod metrics;
pub mod report;
pub mod session;
pub mod simulator;
pub mod step;

pub use command::{execute, Outcome};
pub use config::{parse_dimensions, parse_placement, ConfigError, ScenarioConfig, VehicleSpec};
pub use metrics::RunMetrics;
pub use report::{RosterEntry, VehicleOutcome};
pub use session::{Session, SessionError};
pub use simulator::Simulator;
pub use step::Step;
