//! The step scheduler.
//!
//! [`Simulator`] holds the ordered list of [`Step`]s built up as vehicle
//! programs are registered, and replays them over a [`Grid`] in one
//! deterministic pass. Collision detection runs after every individual
//! command rather than once per step, so registration order inside a step
//! decides which of two vehicles converging on a cell is detected first.
//!
//! There is no early exit: once a vehicle is frozen its remaining
//! commands are still visited and skipped, which keeps its last active
//! step at the step where it froze.

use std::time::Instant;

use gridrun_core::{parse_program, Command, CommandKind, ParseError, StepIndex, VehicleId};
use gridrun_space::Grid;
use tracing::debug;

use crate::metrics::RunMetrics;
use crate::step::Step;

/// Ordered sequence of steps to replay.
///
/// # Examples
///
/// ```
/// use gridrun_core::{Coordinate, Heading};
/// use gridrun_engine::Simulator;
/// use gridrun_space::Grid;
///
/// let mut grid = Grid::new(10, 10).unwrap();
/// let a = grid.add_vehicle("A", Coordinate::new(1, 2), Heading::North).unwrap();
///
/// let mut sim = Simulator::new();
/// sim.register_program(a, "FFRFF").unwrap();
/// let metrics = sim.run(&mut grid);
///
/// assert_eq!(metrics.moves, 4);
/// assert_eq!(grid.position_of(a), Some(Coordinate::new(3, 4)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Simulator {
    steps: Vec<Step>,
}

impl Simulator {
    /// Create a simulator with no steps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Register one instruction character for `vehicle` at `tick`.
    ///
    /// Appends to the step at `tick`, creating it (and any missing steps
    /// before it) if absent. Fails without registering anything if
    /// `command` is not one of `F`, `L`, `R`.
    pub fn register_instruction(
        &mut self,
        vehicle: VehicleId,
        tick: StepIndex,
        command: char,
    ) -> Result<(), ParseError> {
        let kind = CommandKind::from_char(command, tick.index())?;
        self.register(Command::new(kind, vehicle), tick);
        Ok(())
    }

    /// Register a whole program, character `i` at step `i`.
    ///
    /// The program is validated before anything is registered. Returns the
    /// number of commands registered.
    pub fn register_program(&mut self, vehicle: VehicleId, program: &str) -> Result<usize, ParseError> {
        let kinds = parse_program(program)?;
        self.register_commands(vehicle, &kinds);
        Ok(kinds.len())
    }

    /// Register already-parsed command kinds, kind `i` at step `i`.
    pub fn register_commands(&mut self, vehicle: VehicleId, kinds: &[CommandKind]) {
        for (i, &kind) in kinds.iter().enumerate() {
            self.register(Command::new(kind, vehicle), StepIndex(i as u32));
        }
    }

    fn register(&mut self, command: Command, tick: StepIndex) {
        while self.steps.len() <= tick.index() {
            let next = StepIndex(self.steps.len() as u32);
            self.steps.push(Step::new(next));
        }
        self.steps[tick.index()].push(command);
    }

    /// Replay every step over `grid`.
    ///
    /// Never fails: boundary hits and frozen vehicles are absorbed as
    /// no-ops. The final state is read back from the grid; the returned
    /// metrics only summarize the run.
    ///
    /// Running the same simulator twice over the same grid replays the
    /// programs from wherever the first run left the vehicles;
    /// [`Session`](crate::Session) prevents that.
    pub fn run(&self, grid: &mut Grid) -> RunMetrics {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        debug!(
            steps = self.steps.len(),
            vehicles = grid.len(),
            "starting run"
        );

        for step in &self.steps {
            step.run(grid, &mut metrics);
            metrics.steps += 1;
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        debug!(
            steps = metrics.steps,
            executed = metrics.commands_executed,
            skipped = metrics.commands_skipped,
            frozen = metrics.vehicles_frozen,
            total_us = metrics.total_us,
            "run complete"
        );
        metrics
    }
}
