//! Bounded 2D grid with occupancy tracking and collision detection.

use crate::vehicle::Vehicle;
use gridrun_core::{Coordinate, GridError, Heading, VehicleId};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Occupants of a single cell, in arrival order.
///
/// Almost every bucket holds one vehicle; a collision makes it two.
pub type Bucket = SmallVec<[VehicleId; 2]>;

/// A `width x height` field of unit cells.
///
/// Cell `(x, y)` is valid when `0 <= x < width` and `0 <= y < height`.
/// The boundary is a wall: nothing wraps.
///
/// The grid owns every [`Vehicle`] and the coordinate-to-occupants map.
/// That map is the source of truth for position: a vehicle appears in
/// exactly one bucket, and [`move_vehicle`](Grid::move_vehicle) is the
/// only write path, updating the map and the vehicle's mirrored
/// position together. Because vehicles are never removed, the mirrored
/// position doubles as the identity-to-coordinate index behind
/// [`position_of`](Grid::position_of).
///
/// Both maps iterate in insertion order, so reports and collision scans
/// are deterministic.
///
/// # Examples
///
/// ```
/// use gridrun_core::{Coordinate, Heading};
/// use gridrun_space::Grid;
///
/// let mut grid = Grid::new(10, 10).unwrap();
/// let a = grid.add_vehicle("A", Coordinate::new(1, 2), Heading::North).unwrap();
/// assert_eq!(grid.position_of(a), Some(Coordinate::new(1, 2)));
/// assert!(grid.is_out_of_bounds(Coordinate::new(10, 0)));
/// assert!(!grid.detect_collisions());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    vehicles: Vec<Vehicle>,
    names: IndexMap<String, VehicleId>,
    occupancy: IndexMap<Coordinate, Bucket>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            vehicles: Vec::new(),
            names: IndexMap::new(),
            occupancy: IndexMap::new(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of vehicles on the grid.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether no vehicle has been added yet.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// `true` iff `coord` lies outside `[0, width) x [0, height)`.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        !(0..self.width).contains(&coord.x) || !(0..self.height).contains(&coord.y)
    }

    /// Whether any vehicle occupies `coord`.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.occupancy.contains_key(&coord)
    }

    /// Place a new vehicle.
    ///
    /// Checks, in order, that the name is unused, that `coord` is in
    /// bounds, and that no vehicle occupies `coord`. On any failure the
    /// grid is left untouched.
    pub fn add_vehicle(
        &mut self,
        name: impl Into<String>,
        coord: Coordinate,
        heading: Heading,
    ) -> Result<VehicleId, GridError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GridError::DuplicateIdentity { name });
        }
        self.check_placement(coord)?;

        // Vehicles are never removed, so the next index is the next ID.
        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(Vehicle::new(id, name.clone(), coord, heading));
        self.names.insert(name, id);
        self.occupancy.entry(coord).or_default().push(id);
        Ok(id)
    }

    /// Whether a new vehicle could be placed at `coord`.
    ///
    /// Fails with [`GridError::OutOfBounds`] first, then with
    /// [`GridError::PositionOccupied`] naming the earliest occupant.
    pub fn check_placement(&self, coord: Coordinate) -> Result<(), GridError> {
        if self.is_out_of_bounds(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        if let Some(&occupant) = self.occupants(coord).first() {
            return Err(GridError::PositionOccupied {
                coord,
                occupant: self.vehicles[occupant.index()].name().to_string(),
            });
        }
        Ok(())
    }

    /// Look up a vehicle's ID by name.
    pub fn vehicle_id(&self, name: &str) -> Option<VehicleId> {
        self.names.get(name).copied()
    }

    /// Look up a vehicle's ID by name, failing with
    /// [`GridError::UnknownVehicle`].
    pub fn require_vehicle(&self, name: &str) -> Result<VehicleId, GridError> {
        self.vehicle_id(name)
            .ok_or_else(|| GridError::UnknownVehicle { name: name.to_string() })
    }

    /// The vehicle with this ID.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    /// Mutable access for heading and collision state.
    ///
    /// Position cannot be changed through this reference; use
    /// [`move_vehicle`](Self::move_vehicle).
    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index())
    }

    /// The vehicle with this name.
    pub fn vehicle_by_name(&self, name: &str) -> Option<&Vehicle> {
        self.vehicle_id(name).and_then(|id| self.vehicle(id))
    }

    /// All vehicles in registration order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// All vehicles in registration order, mutably.
    pub fn vehicles_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    /// Current cell of a vehicle, or `None` for an unknown ID.
    pub fn position_of(&self, id: VehicleId) -> Option<Coordinate> {
        self.vehicle(id).map(Vehicle::position)
    }

    /// Occupants of `coord` in arrival order; empty if the cell is free.
    pub fn occupants(&self, coord: Coordinate) -> &[VehicleId] {
        self.occupancy.get(&coord).map_or(&[][..], |b| b.as_slice())
    }

    /// Every occupied cell with its occupants, in first-occupied order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &[VehicleId])> {
        self.occupancy.iter().map(|(c, b)| (*c, b.as_slice()))
    }

    /// Relocate a vehicle to `to`.
    ///
    /// Removes the vehicle from its current bucket (dropping the bucket if
    /// it empties), appends it to the bucket at `to` (creating it if
    /// absent), and updates the vehicle's mirrored position.
    /// Returns `false`, changing nothing, for an unknown ID or an
    /// out-of-bounds target.
    pub fn move_vehicle(&mut self, id: VehicleId, to: Coordinate) -> bool {
        if self.is_out_of_bounds(to) {
            return false;
        }
        let Some(from) = self.position_of(id) else {
            return false;
        };
        if let Some(bucket) = self.occupancy.get_mut(&from) {
            bucket.retain(|v| *v != id);
            if bucket.is_empty() {
                self.occupancy.shift_remove(&from);
            }
        }
        self.occupancy.entry(to).or_default().push(id);
        self.vehicles[id.index()].set_position(to);
        true
    }

    /// Mark every vehicle sharing a cell with another as collided.
    ///
    /// Returns whether any cell holds two or more vehicles. Re-marking an
    /// already collided vehicle changes nothing, in particular not its
    /// freeze step.
    pub fn detect_collisions(&mut self) -> bool {
        let mut found = false;
        for bucket in self.occupancy.values() {
            if bucket.len() < 2 {
                continue;
            }
            found = true;
            for id in bucket {
                self.vehicles[id.index()].mark_collided();
            }
        }
        found
    }

    /// Other vehicles sharing `id`'s cell, in arrival order.
    pub fn partners_of(&self, id: VehicleId) -> Bucket {
        self.position_of(id)
            .map(|c| self.occupants(c).iter().copied().filter(|v| *v != id).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension { width: 0, height: 5 }
        );
        assert!(matches!(
            Grid::new(5, -1),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn bounds_are_half_open() {
        let g = Grid::new(10, 5).unwrap();
        assert!(!g.is_out_of_bounds(c(0, 0)));
        assert!(!g.is_out_of_bounds(c(9, 4)));
        assert!(g.is_out_of_bounds(c(10, 4)));
        assert!(g.is_out_of_bounds(c(9, 5)));
        assert!(g.is_out_of_bounds(c(-1, 0)));
        assert!(g.is_out_of_bounds(c(0, -1)));
    }

    #[test]
    fn add_vehicle_assigns_sequential_ids() {
        let mut g = Grid::new(10, 10).unwrap();
        let a = g.add_vehicle("A", c(1, 2), Heading::North).unwrap();
        let b = g.add_vehicle("B", c(7, 8), Heading::West).unwrap();
        assert_eq!((a, b), (VehicleId(0), VehicleId(1)));
        assert_eq!(g.len(), 2);
        assert_eq!(g.vehicle_id("B"), Some(b));
        assert_eq!(g.vehicle_by_name("A").unwrap().heading(), Heading::North);
    }

    #[test]
    fn add_vehicle_rejects_duplicate_name() {
        let mut g = Grid::new(10, 10).unwrap();
        g.add_vehicle("A", c(1, 2), Heading::North).unwrap();
        assert_eq!(
            g.add_vehicle("A", c(3, 3), Heading::North),
            Err(GridError::DuplicateIdentity { name: "A".into() })
        );
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn add_vehicle_rejects_out_of_bounds() {
        let mut g = Grid::new(10, 10).unwrap();
        assert!(matches!(
            g.add_vehicle("A", c(10, 0), Heading::North),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(g.is_empty());
        assert_eq!(g.cells().count(), 0);
    }

    #[test]
    fn add_vehicle_rejects_occupied_cell() {
        let mut g = Grid::new(10, 10).unwrap();
        g.add_vehicle("A", c(1, 2), Heading::North).unwrap();
        assert_eq!(
            g.add_vehicle("B", c(1, 2), Heading::South),
            Err(GridError::PositionOccupied {
                coord: c(1, 2),
                occupant: "A".into(),
            })
        );
        assert_eq!(g.len(), 1);
        assert_eq!(g.occupants(c(1, 2)), &[VehicleId(0)]);
        assert_eq!(g.vehicle_id("B"), None);
    }

    #[test]
    fn require_vehicle_names_the_missing_car() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            g.require_vehicle("Z"),
            Err(GridError::UnknownVehicle { name: "Z".into() })
        );
    }

    #[test]
    fn move_vehicle_updates_map_and_vehicle() {
        let mut g = Grid::new(10, 10).unwrap();
        let a = g.add_vehicle("A", c(1, 2), Heading::North).unwrap();
        assert!(g.move_vehicle(a, c(1, 3)));
        assert_eq!(g.position_of(a), Some(c(1, 3)));
        assert!(!g.is_occupied(c(1, 2)));
        assert_eq!(g.occupants(c(1, 3)), &[a]);
        assert_eq!(g.cells().count(), 1);
    }

    #[test]
    fn move_vehicle_unknown_id_is_rejected() {
        let mut g = Grid::new(10, 10).unwrap();
        assert!(!g.move_vehicle(VehicleId(7), c(0, 0)));
        assert_eq!(g.cells().count(), 0);
    }

    #[test]
    fn move_vehicle_out_of_bounds_is_rejected() {
        let mut g = Grid::new(5, 5).unwrap();
        let a = g.add_vehicle("A", c(4, 4), Heading::North).unwrap();
        let before: Vec<(Coordinate, Vec<VehicleId>)> =
            g.cells().map(|(coord, ids)| (coord, ids.to_vec())).collect();

        for to in [c(9, 9), c(-1, 0), c(4, 5), c(5, 4)] {
            assert!(!g.move_vehicle(a, to));
        }
        let after: Vec<(Coordinate, Vec<VehicleId>)> =
            g.cells().map(|(coord, ids)| (coord, ids.to_vec())).collect();
        assert_eq!(before, after);
        assert_eq!(g.position_of(a), Some(c(4, 4)));
        assert_eq!(g.occupants(c(4, 4)), &[a]);
        assert!(g.vehicles().all(|v| !g.is_out_of_bounds(v.position())));
    }

    #[test]
    fn check_placement_reports_bounds_before_occupancy() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(g.check_placement(c(0, 0)), Ok(()));
        g.add_vehicle("A", c(1, 1), Heading::North).unwrap();
        assert_eq!(
            g.check_placement(c(3, 0)),
            Err(GridError::OutOfBounds { coord: c(3, 0), width: 3, height: 3 })
        );
        assert_eq!(
            g.check_placement(c(1, 1)),
            Err(GridError::PositionOccupied { coord: c(1, 1), occupant: "A".into() })
        );
        assert_eq!(g.check_placement(c(2, 2)), Ok(()));
    }

    #[test]
    fn detect_collisions_marks_every_occupant() {
        let mut g = Grid::new(10, 10).unwrap();
        let a = g.add_vehicle("A", c(1, 1), Heading::East).unwrap();
        let b = g.add_vehicle("B", c(3, 1), Heading::West).unwrap();
        let d = g.add_vehicle("D", c(5, 5), Heading::West).unwrap();
        assert!(!g.detect_collisions());

        g.move_vehicle(a, c(2, 1));
        g.move_vehicle(b, c(2, 1));
        assert!(g.detect_collisions());
        assert!(g.vehicle(a).unwrap().is_collided());
        assert!(g.vehicle(b).unwrap().is_collided());
        assert!(!g.vehicle(d).unwrap().is_collided());
        assert_eq!(g.partners_of(a).as_slice(), &[b]);
        assert!(g.partners_of(d).is_empty());

        // Detection is idempotent and does not touch freeze steps.
        assert!(g.detect_collisions());
        assert_eq!(g.vehicle(a).unwrap().freeze_step(), None);
    }

    #[test]
    fn cells_iterate_in_first_occupied_order() {
        let mut g = Grid::new(10, 10).unwrap();
        g.add_vehicle("A", c(5, 5), Heading::North).unwrap();
        g.add_vehicle("B", c(0, 0), Heading::North).unwrap();
        let coords: Vec<Coordinate> = g.cells().map(|(coord, _)| coord).collect();
        assert_eq!(coords, vec![c(5, 5), c(0, 0)]);
    }
}
