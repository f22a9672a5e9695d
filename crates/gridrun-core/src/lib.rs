//! Core value types for the gridrun vehicle simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! coordinates and identifiers, headings, command kinds, and the
//! validation error types raised while a scenario is being assembled.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;
pub mod id;

pub use command::{parse_program, Command, CommandKind};
pub use error::{GridError, ParseError};
pub use heading::Heading;
pub use id::{Coordinate, StepIndex, VehicleId, VehicleKind};
