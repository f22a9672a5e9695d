//! Reusable scenario fixtures.
//!
//! - [`lone_vehicle_config`]: one car on a 10 x 10 field, no collisions.
//! - [`crossing_pair_config`]: two cars whose paths meet at (5,4).
//! - [`head_on_config`]: two cars driving at each other along one row.
//! - [`wall_hugger_config`]: one car that spends its program against the
//!   north wall.

use gridrun_core::Heading;
use gridrun_engine::{ScenarioConfig, VehicleSpec};

/// `A (1,2) N FFRFFFFFF` alone on a 10 x 10 field. Ends at (7,4) facing east.
pub fn lone_vehicle_config() -> ScenarioConfig {
    ScenarioConfig::new(10, 10).with_vehicle(VehicleSpec::new(
        "A",
        (1, 2),
        Heading::North,
        "FFRFFFFFF",
    ))
}

/// [`lone_vehicle_config`] plus `B (7,8) W FFLFFFFFFFF`. Both freeze at
/// (5,4) on step index 6.
pub fn crossing_pair_config() -> ScenarioConfig {
    lone_vehicle_config().with_vehicle(VehicleSpec::new(
        "B",
        (7, 8),
        Heading::West,
        "FFLFFFFFFFF",
    ))
}

/// `A` and `B` on a `width x 1` strip, at opposite ends, facing each
/// other, each with `width` forward commands.
pub fn head_on_config(width: i32) -> ScenarioConfig {
    let program = "F".repeat(width.max(0) as usize);
    ScenarioConfig::new(width, 1)
        .with_vehicle(VehicleSpec::new("A", (0, 0), Heading::East, program.clone()))
        .with_vehicle(VehicleSpec::new("B", (width - 1, 0), Heading::West, program))
}

/// One car two cells below the north wall of a 3 x 3 field, asked to
/// drive forward five times.
pub fn wall_hugger_config() -> ScenarioConfig {
    ScenarioConfig::new(3, 3).with_vehicle(VehicleSpec::new("W", (1, 0), Heading::North, "FFFFF"))
}
