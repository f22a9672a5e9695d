//! The bounded field vehicles drive on.
//!
//! This crate defines [`Grid`], the single mutable structure of a
//! simulation run, and the [`Vehicle`] entities it owns. The grid keeps
//! the coordinate-to-occupants map that is the source of truth for every
//! position, funnels all position changes through
//! [`Grid::move_vehicle`], and detects collisions as spatial
//! co-occupancy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod vehicle;

pub use grid::{Bucket, Grid};
pub use vehicle::Vehicle;
