//! Vehicle entities and their per-run state.

use gridrun_core::{Coordinate, Heading, StepIndex, VehicleId, VehicleKind};

/// A single-cell vehicle on the grid.
///
/// Vehicles are created by [`Grid::add_vehicle`](crate::Grid::add_vehicle)
/// and live for the whole run. Their position is owned by the grid's
/// occupancy map and mirrored here by
/// [`Grid::move_vehicle`](crate::Grid::move_vehicle); nothing else writes
/// it.
///
/// The collided flag is a one-way latch, and `freeze_step` is recorded at
/// most once, by the scheduler, at the step in which the collision was
/// detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    name: String,
    kind: VehicleKind,
    position: Coordinate,
    heading: Heading,
    collided: bool,
    freeze_step: Option<StepIndex>,
    last_active_step: Option<StepIndex>,
}

impl Vehicle {
    pub(crate) fn new(id: VehicleId, name: String, position: Coordinate, heading: Heading) -> Self {
        Self {
            id,
            name,
            kind: VehicleKind::Car,
            position,
            heading,
            collided: false,
            freeze_step: None,
            last_active_step: None,
        }
    }

    /// Grid-assigned identifier.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Unique user-facing name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity kind.
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Current cell.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the vehicle has collided and is frozen.
    pub fn is_collided(&self) -> bool {
        self.collided
    }

    /// Step at which the collision was detected, 0-based.
    pub fn freeze_step(&self) -> Option<StepIndex> {
        self.freeze_step
    }

    /// Last step at which one of this vehicle's commands was executed.
    pub fn last_active_step(&self) -> Option<StepIndex> {
        self.last_active_step
    }

    /// The cell `distance` cells ahead along the current heading.
    ///
    /// North and South move along y (+/-), East and West along x (+/-).
    /// Does not check bounds.
    pub fn next_position(&self, distance: i32) -> Coordinate {
        let (dx, dy) = self.heading.unit_offset();
        self.position
            .offset(dx.saturating_mul(distance), dy.saturating_mul(distance))
    }

    /// The adjacent cell along the current heading.
    pub fn next_position_unit(&self) -> Coordinate {
        self.next_position(1)
    }

    /// Quarter turn clockwise. Never touches position.
    pub fn rotate_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Quarter turn anticlockwise. Never touches position.
    pub fn rotate_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Latch the collided flag.
    ///
    /// Idempotent. Does not record a freeze step; that is tied to the
    /// step being executed and is done through [`freeze_at`](Self::freeze_at).
    pub fn mark_collided(&mut self) {
        self.collided = true;
    }

    /// Record `step` as the freeze step of a collided vehicle if none is
    /// recorded yet.
    ///
    /// Returns `true` if this call recorded it. A vehicle that has not
    /// collided is left alone. Step 0 is a valid freeze step and is never
    /// mistaken for "unset".
    pub fn freeze_at(&mut self, step: StepIndex) -> bool {
        if !self.collided || self.freeze_step.is_some() {
            return false;
        }
        self.freeze_step = Some(step);
        true
    }

    /// Record that one of this vehicle's commands ran at `step`.
    pub fn record_active(&mut self, step: StepIndex) {
        self.last_active_step = Some(step);
    }

    pub(crate) fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(x: i32, y: i32, heading: Heading) -> Vehicle {
        Vehicle::new(VehicleId(0), "A".into(), Coordinate::new(x, y), heading)
    }

    #[test]
    fn next_position_follows_heading() {
        assert_eq!(car(2, 2, Heading::North).next_position_unit(), Coordinate::new(2, 3));
        assert_eq!(car(2, 2, Heading::South).next_position_unit(), Coordinate::new(2, 1));
        assert_eq!(car(2, 2, Heading::East).next_position_unit(), Coordinate::new(3, 2));
        assert_eq!(car(2, 2, Heading::West).next_position_unit(), Coordinate::new(1, 2));
    }

    #[test]
    fn next_position_scales_with_distance() {
        assert_eq!(car(0, 0, Heading::North).next_position(3), Coordinate::new(0, 3));
        assert_eq!(car(5, 5, Heading::West).next_position(2), Coordinate::new(3, 5));
    }

    #[test]
    fn rotation_keeps_position() {
        let mut v = car(4, 4, Heading::North);
        v.rotate_right();
        assert_eq!(v.heading(), Heading::East);
        v.rotate_left();
        v.rotate_left();
        assert_eq!(v.heading(), Heading::West);
        assert_eq!(v.position(), Coordinate::new(4, 4));
    }

    #[test]
    fn mark_collided_leaves_freeze_step_unset() {
        let mut v = car(0, 0, Heading::North);
        v.mark_collided();
        v.mark_collided();
        assert!(v.is_collided());
        assert_eq!(v.freeze_step(), None);
    }

    #[test]
    fn freeze_step_zero_is_recorded_once() {
        let mut v = car(0, 0, Heading::North);
        v.mark_collided();
        assert!(v.freeze_at(StepIndex(0)));
        assert!(!v.freeze_at(StepIndex(3)));
        assert_eq!(v.freeze_step(), Some(StepIndex(0)));
    }

    #[test]
    fn freeze_at_requires_a_collision() {
        let mut v = car(0, 0, Heading::North);
        assert!(!v.freeze_at(StepIndex(0)));
        assert!(!v.freeze_at(StepIndex(4)));
        assert_eq!(v.freeze_step(), None);

        v.mark_collided();
        assert!(v.freeze_at(StepIndex(5)));
        assert_eq!(v.freeze_step(), Some(StepIndex(5)));
    }

    #[test]
    fn new_vehicle_is_a_fresh_car() {
        let v = car(1, 2, Heading::North);
        assert_eq!(v.kind(), VehicleKind::Car);
        assert_eq!(v.name(), "A");
        assert!(!v.is_collided());
        assert_eq!(v.last_active_step(), None);
    }
}
