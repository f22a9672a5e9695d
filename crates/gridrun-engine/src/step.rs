//! One simulation tick: an ordered bundle of commands.

use gridrun_core::{Command, StepIndex};
use gridrun_space::Grid;
use tracing::{info, trace, warn};

use crate::command::execute;
use crate::metrics::RunMetrics;

/// The commands every vehicle with an instruction at this tick performs.
///
/// Commands keep their registration order, which is the order vehicles
/// entered the simulation. That order is observable: collision checks run
/// after each command, so the first mover into a shared cell is detected
/// before later vehicles in the same step get to act.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    index: StepIndex,
    commands: Vec<Command>,
}

impl Step {
    /// Create an empty step.
    pub fn new(index: StepIndex) -> Self {
        Self {
            index,
            commands: Vec::new(),
        }
    }

    /// Position of this step in the run, 0-based.
    pub fn index(&self) -> StepIndex {
        self.index
    }

    /// Commands in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the step has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a command after those already registered.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Execute every command of this step in order.
    ///
    /// For each command: skip it if its vehicle is already collided;
    /// otherwise execute it, record the vehicle as active at this step,
    /// run collision detection, and stamp this step as the freeze step on
    /// every collided vehicle that has none yet.
    pub fn run(&self, grid: &mut Grid, metrics: &mut RunMetrics) {
        for &command in &self.commands {
            match grid.vehicle(command.vehicle) {
                None => {
                    warn!(step = %self.index, vehicle = %command.vehicle, "command for unknown vehicle");
                    metrics.commands_skipped += 1;
                    continue;
                }
                Some(v) if v.is_collided() => {
                    metrics.commands_skipped += 1;
                    continue;
                }
                Some(_) => {}
            }

            let outcome = execute(command, grid);
            trace!(
                step = %self.index,
                vehicle = %command.vehicle,
                kind = %command.kind,
                ?outcome,
                "executed command"
            );
            metrics.record(outcome);
            if let Some(v) = grid.vehicle_mut(command.vehicle) {
                v.record_active(self.index);
            }

            if grid.detect_collisions() {
                self.freeze_collided(grid, metrics);
            }
        }
    }

    fn freeze_collided(&self, grid: &mut Grid, metrics: &mut RunMetrics) {
        let mut newly_frozen = 0;
        for v in grid.vehicles_mut() {
            if v.is_collided() && v.freeze_at(self.index) {
                newly_frozen += 1;
                info!(
                    step = self.index.ordinal(),
                    vehicle = v.name(),
                    position = %v.position(),
                    "vehicle frozen by collision"
                );
            }
        }
        if newly_frozen > 0 {
            metrics.collision_events += 1;
            metrics.vehicles_frozen += newly_frozen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrun_core::{CommandKind, Coordinate, Heading, VehicleId};

    #[test]
    fn push_preserves_order() {
        let mut step = Step::new(StepIndex(2));
        step.push(Command::new(CommandKind::Forward, VehicleId(1)));
        step.push(Command::new(CommandKind::RotateLeft, VehicleId(0)));
        assert_eq!(step.index(), StepIndex(2));
        assert_eq!(step.len(), 2);
        assert_eq!(step.commands()[0].vehicle, VehicleId(1));
        assert_eq!(step.commands()[1].kind, CommandKind::RotateLeft);
    }

    #[test]
    fn run_stamps_activity_and_freezes_at_this_step() {
        let mut grid = Grid::new(5, 5).unwrap();
        let a = grid.add_vehicle("A", Coordinate::new(1, 2), Heading::East).unwrap();
        let b = grid.add_vehicle("B", Coordinate::new(3, 2), Heading::West).unwrap();
        let mut step = Step::new(StepIndex(0));
        step.push(Command::new(CommandKind::Forward, a));
        step.push(Command::new(CommandKind::Forward, b));

        let mut metrics = RunMetrics::default();
        step.run(&mut grid, &mut metrics);

        for id in [a, b] {
            let v = grid.vehicle(id).unwrap();
            assert!(v.is_collided());
            assert_eq!(v.freeze_step(), Some(StepIndex(0)));
            assert_eq!(v.last_active_step(), Some(StepIndex(0)));
        }
        assert_eq!(metrics.moves, 2);
        assert_eq!(metrics.collision_events, 1);
        assert_eq!(metrics.vehicles_frozen, 2);
    }

    #[test]
    fn frozen_vehicle_commands_are_skipped() {
        let mut grid = Grid::new(5, 5).unwrap();
        let a = grid.add_vehicle("A", Coordinate::new(0, 0), Heading::North).unwrap();
        grid.vehicle_mut(a).unwrap().mark_collided();
        let mut step = Step::new(StepIndex(4));
        step.push(Command::new(CommandKind::Forward, a));

        let mut metrics = RunMetrics::default();
        step.run(&mut grid, &mut metrics);

        let v = grid.vehicle(a).unwrap();
        assert_eq!(v.position(), Coordinate::new(0, 0));
        assert_eq!(v.last_active_step(), None);
        assert_eq!(metrics.commands_skipped, 1);
        assert_eq!(metrics.commands_executed, 0);
    }
}
