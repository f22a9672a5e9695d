//! Execution of a single command against the grid.

use gridrun_core::{Command, CommandKind, Coordinate};
use gridrun_space::Grid;

/// What executing one command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The vehicle advanced one cell.
    Moved {
        /// Cell before the move.
        from: Coordinate,
        /// Cell after the move.
        to: Coordinate,
    },
    /// A forward move would have left the grid; the vehicle stayed put.
    Blocked,
    /// The vehicle turned in place.
    Rotated,
    /// Nothing happened: the vehicle is frozen or unknown to the grid.
    Skipped,
}

/// Execute `command` against `grid`.
///
/// A collided vehicle is never touched. Otherwise a forward move that
/// would leave the grid is absorbed (the boundary is a wall), an
/// in-bounds one goes through [`Grid::move_vehicle`], and rotations only
/// change heading.
///
/// Does not run collision detection; the scheduler does that after every
/// command.
pub fn execute(command: Command, grid: &mut Grid) -> Outcome {
    let Some(vehicle) = grid.vehicle_mut(command.vehicle) else {
        return Outcome::Skipped;
    };
    if vehicle.is_collided() {
        return Outcome::Skipped;
    }

    match command.kind {
        CommandKind::Forward => {
            let from = vehicle.position();
            let to = vehicle.next_position_unit();
            if grid.is_out_of_bounds(to) {
                return Outcome::Blocked;
            }
            grid.move_vehicle(command.vehicle, to);
            Outcome::Moved { from, to }
        }
        CommandKind::RotateRight => {
            vehicle.rotate_right();
            Outcome::Rotated
        }
        CommandKind::RotateLeft => {
            vehicle.rotate_left();
            Outcome::Rotated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrun_core::{Heading, VehicleId};

    fn grid_with(x: i32, y: i32, heading: Heading) -> (Grid, VehicleId) {
        let mut grid = Grid::new(5, 5).unwrap();
        let id = grid.add_vehicle("A", Coordinate::new(x, y), heading).unwrap();
        (grid, id)
    }

    fn cells(grid: &Grid) -> Vec<(Coordinate, Vec<VehicleId>)> {
        grid.cells().map(|(coord, ids)| (coord, ids.to_vec())).collect()
    }

    #[test]
    fn forward_moves_one_cell() {
        let (mut grid, id) = grid_with(2, 2, Heading::East);
        let out = execute(Command::new(CommandKind::Forward, id), &mut grid);
        assert_eq!(
            out,
            Outcome::Moved {
                from: Coordinate::new(2, 2),
                to: Coordinate::new(3, 2),
            }
        );
        assert_eq!(grid.position_of(id), Some(Coordinate::new(3, 2)));
    }

    #[test]
    fn forward_into_wall_is_absorbed() {
        let (mut grid, id) = grid_with(0, 4, Heading::North);
        let out = execute(Command::new(CommandKind::Forward, id), &mut grid);
        assert_eq!(out, Outcome::Blocked);
        let v = grid.vehicle(id).unwrap();
        assert_eq!(v.position(), Coordinate::new(0, 4));
        assert_eq!(v.heading(), Heading::North);
    }

    #[test]
    fn wall_absorbs_forward_in_every_heading() {
        for (heading, x, y) in [
            (Heading::North, 2, 4),
            (Heading::East, 4, 2),
            (Heading::South, 2, 0),
            (Heading::West, 0, 2),
        ] {
            let (mut grid, id) = grid_with(x, y, heading);
            let before = cells(&grid);
            let out = execute(Command::new(CommandKind::Forward, id), &mut grid);
            assert_eq!(out, Outcome::Blocked, "{heading:?}");
            let v = grid.vehicle(id).unwrap();
            assert_eq!(v.position(), Coordinate::new(x, y));
            assert_eq!(v.heading(), heading);
            assert_eq!(cells(&grid), before);
        }
    }

    #[test]
    fn rotations_only_change_heading() {
        let (mut grid, id) = grid_with(0, 0, Heading::South);
        assert_eq!(
            execute(Command::new(CommandKind::RotateRight, id), &mut grid),
            Outcome::Rotated
        );
        assert_eq!(grid.vehicle(id).unwrap().heading(), Heading::West);
        execute(Command::new(CommandKind::RotateLeft, id), &mut grid);
        execute(Command::new(CommandKind::RotateLeft, id), &mut grid);
        let v = grid.vehicle(id).unwrap();
        assert_eq!(v.heading(), Heading::East);
        assert_eq!(v.position(), Coordinate::new(0, 0));
    }

    #[test]
    fn collided_vehicle_is_untouched() {
        let (mut grid, id) = grid_with(2, 2, Heading::North);
        grid.vehicle_mut(id).unwrap().mark_collided();
        let before = grid.vehicle(id).unwrap().clone();
        let cells_before = cells(&grid);
        for kind in [
            CommandKind::Forward,
            CommandKind::RotateRight,
            CommandKind::RotateLeft,
        ] {
            assert_eq!(execute(Command::new(kind, id), &mut grid), Outcome::Skipped);
        }
        assert_eq!(grid.vehicle(id).unwrap(), &before);
        assert_eq!(cells(&grid), cells_before);
    }

    #[test]
    fn unknown_vehicle_is_skipped() {
        let (mut grid, _) = grid_with(2, 2, Heading::North);
        let out = execute(Command::new(CommandKind::Forward, VehicleId(9)), &mut grid);
        assert_eq!(out, Outcome::Skipped);
    }
}
