//! Per-run counters for the simulation engine.
//!
//! [`RunMetrics`] summarizes what a single [`Simulator::run`](crate::Simulator::run)
//! did. The final vehicle state is read back from the grid; these
//! counters are for logging and diagnostics.

use crate::command::Outcome;

/// Counters collected during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of steps processed.
    pub steps: u64,
    /// Commands that were executed (moved, blocked or rotated).
    pub commands_executed: u64,
    /// Commands skipped because their vehicle was frozen or unknown.
    pub commands_skipped: u64,
    /// Forward commands that moved their vehicle.
    pub moves: u64,
    /// Forward commands absorbed by the boundary.
    pub blocked_moves: u64,
    /// Rotate commands.
    pub rotations: u64,
    /// Detection passes that froze at least one vehicle.
    pub collision_events: u64,
    /// Vehicles frozen over the whole run.
    pub vehicles_frozen: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
}

impl RunMetrics {
    /// Count one command outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Moved { .. } => {
                self.commands_executed += 1;
                self.moves += 1;
            }
            Outcome::Blocked => {
                self.commands_executed += 1;
                self.blocked_moves += 1;
            }
            Outcome::Rotated => {
                self.commands_executed += 1;
                self.rotations += 1;
            }
            Outcome::Skipped => self.commands_skipped += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrun_core::Coordinate;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.commands_executed, 0);
        assert_eq!(m.commands_skipped, 0);
        assert_eq!(m.moves, 0);
        assert_eq!(m.blocked_moves, 0);
        assert_eq!(m.rotations, 0);
        assert_eq!(m.collision_events, 0);
        assert_eq!(m.vehicles_frozen, 0);
        assert_eq!(m.total_us, 0);
    }

    #[test]
    fn record_splits_by_outcome() {
        let mut m = RunMetrics::default();
        m.record(Outcome::Moved {
            from: Coordinate::new(0, 0),
            to: Coordinate::new(0, 1),
        });
        m.record(Outcome::Blocked);
        m.record(Outcome::Rotated);
        m.record(Outcome::Rotated);
        m.record(Outcome::Skipped);
        assert_eq!(m.commands_executed, 4);
        assert_eq!(m.moves, 1);
        assert_eq!(m.blocked_moves, 1);
        assert_eq!(m.rotations, 2);
        assert_eq!(m.commands_skipped, 1);
    }
}
