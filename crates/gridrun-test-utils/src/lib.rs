//! Test utilities for gridrun development.
//!
//! Provides ready-made [`ScenarioConfig`](gridrun_engine::ScenarioConfig)
//! fixtures and small helpers for turning a finished session into
//! comparable report lines.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridrun_core::Coordinate;
use gridrun_engine::Session;

pub use fixtures::*;

/// Shorthand for [`Coordinate::new`].
pub fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Render the session's outcomes as report lines.
pub fn outcome_lines(session: &Session) -> Vec<String> {
    session.outcomes().iter().map(ToString::to_string).collect()
}

/// Render the session's roster as report lines.
pub fn roster_lines(session: &Session) -> Vec<String> {
    session.roster().iter().map(ToString::to_string).collect()
}

/// Build a session from `config` and run it, panicking on any error.
pub fn run_config(config: &gridrun_engine::ScenarioConfig) -> Session {
    let mut session = Session::from_config(config).expect("fixture config must be valid");
    session.run().expect("fresh session must run");
    session
}
