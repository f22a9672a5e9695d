//! gridrun quickstart: two cars on a 10x10 field.
//!
//! Demonstrates:
//!   1. Building a ScenarioConfig and validating it
//!   2. Creating a Session from it
//!   3. Running once and reading back report lines and metrics
//!   4. Driving the lower-level Grid + Simulator pair directly
//!
//! Run with:
//!   cargo run --example quickstart

use gridrun_core::{Coordinate, Heading};
use gridrun_engine::{ScenarioConfig, Session, Simulator, VehicleOutcome, VehicleSpec};
use gridrun_space::Grid;

// ─── Scenario ───────────────────────────────────────────────────

fn crossing() -> ScenarioConfig {
    ScenarioConfig::new(10, 10)
        .with_vehicle(VehicleSpec::new("A", (1, 2), Heading::North, "FFRFFFFFF"))
        .with_vehicle(VehicleSpec::new("B", (7, 8), Heading::West, "FFLFFFFFFFF"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── Session workflow ───────────────────────────────────────
    let config = crossing();
    config.validate()?;

    let mut session = Session::from_config(&config)?;
    println!("Your current list of cars are:");
    for entry in session.roster() {
        println!("{entry}");
    }

    let metrics = session.run()?;
    println!("After simulation, the result is:");
    for outcome in session.outcomes() {
        println!("{outcome}");
    }
    println!(
        "{} steps, {} commands executed, {} skipped, {} vehicles frozen in {} us",
        metrics.steps,
        metrics.commands_executed,
        metrics.commands_skipped,
        metrics.vehicles_frozen,
        metrics.total_us
    );

    // ─── Lower level: Grid + Simulator ──────────────────────────
    let mut grid = Grid::new(10, 10)?;
    let a = grid.add_vehicle("A", Coordinate::new(1, 2), Heading::North)?;
    let mut sim = Simulator::new();
    sim.register_program(a, "FFRFFFFFF")?;
    sim.run(&mut grid);

    if let Some(v) = grid.vehicle(a) {
        println!("alone, {}", VehicleOutcome::of(&grid, v));
    }
    Ok(())
}
