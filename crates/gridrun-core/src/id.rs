//! Strongly-typed identifiers and the [`Coordinate`] value type.

use std::fmt;

/// Identifies a vehicle within a grid.
///
/// Vehicles are registered in insertion order and assigned sequential
/// IDs. `VehicleId(n)` corresponds to the n-th vehicle added to the grid;
/// IDs are never reused because vehicles are never removed during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// The dense index of this vehicle in registration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VehicleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Zero-based index of a simulation step (one tick across all vehicles).
///
/// Stored 0-based everywhere; reports shown to users are 1-based, see
/// [`StepIndex::ordinal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepIndex(pub u32);

impl StepIndex {
    /// The 1-based step number used in user-facing reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridrun_core::StepIndex;
    ///
    /// assert_eq!(StepIndex(0).ordinal(), 1);
    /// assert_eq!(StepIndex(6).ordinal(), 7);
    /// ```
    pub fn ordinal(self) -> u64 {
        u64::from(self.0) + 1
    }

    /// The dense index of this step in the simulator's step list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StepIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A cell coordinate on the grid.
///
/// `x` grows eastwards and `y` grows northwards. Equality and hashing are
/// by value, so coordinates can key the occupancy map directly.
///
/// # Examples
///
/// ```
/// use gridrun_core::Coordinate;
///
/// let c = Coordinate::new(5, 4);
/// assert_eq!(c.to_string(), "(5,4)");
/// assert_eq!(c, Coordinate::from((5, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column, eastwards.
    pub x: i32,
    /// Row, northwards.
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate displaced by `(dx, dy)`.
    ///
    /// Saturates at the `i32` limits; a saturated coordinate is always
    /// outside any grid, so saturation never produces a false in-bounds
    /// result.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The kind of entity occupying the grid.
///
/// Every vehicle is a single-cell car; the enum leaves room for other
/// single-cell kinds without resorting to trait objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// A car occupying exactly one cell.
    #[default]
    Car,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
        }
    }
}
