//! Compass directions over a 2D tile grid.
//!
//! This module defines the directional vocabulary for movement and facing:
//! - `Direction`: the 8-way compass enumeration plus `None`
//! - Constant direction and step tables for iteration
//! - Conversions between directions, grid steps, and continuous headings
//! - Rotation and axis-similarity queries
//!
//! Coordinate system: Y-axis increases upward (up), X-axis increases
//! rightward (right).

use std::f32::consts::FRAC_1_SQRT_2;

use crate::set::DirectionSet;
use crate::vector::{GridVec2, Vec2};

// ============================================================================
// Direction
// ============================================================================

/// Compass direction for movement and facing on a tile grid.
///
/// `None` is a valid value wherever a direction is stored or compared, and
/// every operation here is total over all nine variants.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    /// No direction (zero vector).
    #[default]
    None,
    Left,
    Right,
    Down,
    Up,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

// ============================================================================
// Constant Tables
// ============================================================================

impl Direction {
    /// The 4 cardinal directions, clockwise from `Up`.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The 4 ordinal (diagonal) directions.
    pub const ORDINAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// All 8 real directions, cardinals first.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Grid steps for [`Self::CARDINAL`], positionally aligned.
    pub const CARDINAL_VECTORS: [GridVec2; 4] = [
        GridVec2::new(0, 1),
        GridVec2::new(1, 0),
        GridVec2::new(0, -1),
        GridVec2::new(-1, 0),
    ];

    /// Grid steps for [`Self::ORDINAL`], positionally aligned.
    pub const ORDINAL_VECTORS: [GridVec2; 4] = [
        GridVec2::new(1, 1),
        GridVec2::new(1, -1),
        GridVec2::new(-1, -1),
        GridVec2::new(-1, 1),
    ];

    /// Grid steps for [`Self::ALL`], positionally aligned.
    pub const ALL_VECTORS: [GridVec2; 8] = [
        GridVec2::new(0, 1),
        GridVec2::new(0, -1),
        GridVec2::new(1, 0),
        GridVec2::new(-1, 0),
        GridVec2::new(-1, 1),
        GridVec2::new(1, 1),
        GridVec2::new(-1, -1),
        GridVec2::new(1, -1),
    ];
}

// ============================================================================
// Conversions
// ============================================================================

impl Direction {
    /// Continuous unit vector for this direction.
    ///
    /// Cardinals map to axis unit vectors, ordinals to normalized diagonals
    /// (components ±1/√2). `None` maps to the zero vector.
    pub const fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::UpLeft => Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Direction::UpRight => Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Direction::DownLeft => Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            Direction::DownRight => Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            Direction::None => Vec2::ZERO,
        }
    }

    /// Grid step for this direction.
    ///
    /// Ordinals keep integral components (`UpLeft -> (-1, 1)`) so grid
    /// movement stays on whole tiles. `None` maps to the zero vector.
    pub const fn grid_vector(self) -> GridVec2 {
        match self {
            Direction::Left => GridVec2::new(-1, 0),
            Direction::Right => GridVec2::new(1, 0),
            Direction::Up => GridVec2::new(0, 1),
            Direction::Down => GridVec2::new(0, -1),
            Direction::UpLeft => GridVec2::new(-1, 1),
            Direction::UpRight => GridVec2::new(1, 1),
            Direction::DownLeft => GridVec2::new(-1, -1),
            Direction::DownRight => GridVec2::new(1, -1),
            Direction::None => GridVec2::ZERO,
        }
    }

    /// Exact direction of the step from `from` to `to`.
    ///
    /// Classifies the sign pattern of the delta, so any magnitude along an
    /// axis counts the same as a single step. Equal endpoints yield `None`.
    pub const fn between(from: GridVec2, to: GridVec2) -> Direction {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        match (dx.signum(), dy.signum()) {
            (0, 1) => Direction::Up,
            (0, -1) => Direction::Down,
            (1, 0) => Direction::Right,
            (-1, 0) => Direction::Left,
            (1, 1) => Direction::UpRight,
            (-1, -1) => Direction::DownLeft,
            (-1, 1) => Direction::UpLeft,
            (1, -1) => Direction::DownRight,
            _ => Direction::None,
        }
    }

    /// Best-matching direction for the continuous heading from `from` to `to`.
    ///
    /// The delta is normalized and compared against every entry of
    /// [`Self::ALL`] by dot product. A zero-length delta yields `None`.
    pub fn nearest(from: Vec2, to: Vec2) -> Direction {
        let heading = (to - from).normalized();
        if heading == Vec2::ZERO {
            return Direction::None;
        }

        // The seed sits below any reachable dot product; the first candidate
        // always wins the opening comparison.
        let mut best = Direction::None;
        let mut best_dot = f32::NEG_INFINITY;
        for candidate in Self::ALL {
            let dot = heading.dot(candidate.unit_vector());
            if dot > best_dot {
                best_dot = dot;
                best = candidate;
            }
        }
        best
    }

    /// Best-matching direction between two grid points.
    ///
    /// Same search as [`Self::nearest`], taking integer endpoints.
    pub fn nearest_grid(from: GridVec2, to: GridVec2) -> Direction {
        Self::nearest(Vec2::from(from), Vec2::from(to))
    }
}

// ============================================================================
// Rotations & Queries
// ============================================================================

impl Direction {
    /// True only for `Up` and `Down`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True only for `Right` and `Left`.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// The direction 180° away. `None` reverses to itself.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::None => Direction::None,
        }
    }

    /// Rotates one 45° step clockwise around the 8-point compass.
    ///
    /// Eight applications return to the starting direction. `None` is a
    /// fixed point.
    pub const fn clockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::UpRight,
            Direction::UpRight => Direction::Right,
            Direction::Right => Direction::DownRight,
            Direction::DownRight => Direction::Down,
            Direction::Down => Direction::DownLeft,
            Direction::DownLeft => Direction::Left,
            Direction::Left => Direction::UpLeft,
            Direction::UpLeft => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// Rotates one 45° step counter-clockwise around the 8-point compass.
    ///
    /// Inverse of [`Self::clockwise`]. `None` is a fixed point.
    pub const fn counter_clockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::UpLeft,
            Direction::UpLeft => Direction::Left,
            Direction::Left => Direction::DownLeft,
            Direction::DownLeft => Direction::Down,
            Direction::Down => Direction::DownRight,
            Direction::DownRight => Direction::Right,
            Direction::Right => Direction::UpRight,
            Direction::UpRight => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// Returns true when `set` contains this direction or its 180° opposite.
    ///
    /// Supports axis-alignment checks ("is anything in this set along the
    /// same line?"). `None` matches nothing.
    pub fn shares_axis_with(self, set: DirectionSet) -> bool {
        if self == Direction::None {
            return false;
        }
        set.contains_direction(self) || set.contains_direction(self.reverse())
    }
}

// ============================================================================
// Fallible Conversions
// ============================================================================

/// Error for conversions that require an exact compass step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionError {
    /// The offset has a component outside `-1..=1`.
    #[error("offset {offset} is not a single compass step")]
    NotAStep { offset: GridVec2 },
}

impl TryFrom<GridVec2> for Direction {
    type Error = DirectionError;

    /// Maps exact single-step offsets back to their direction.
    ///
    /// Inverse of [`Direction::grid_vector`]: `(0, 0)` maps to `None`, and
    /// any offset longer than one step is rejected. Use
    /// [`Direction::between`] to classify arbitrary deltas instead.
    fn try_from(offset: GridVec2) -> Result<Self, Self::Error> {
        match (offset.x, offset.y) {
            (0, 0) => Ok(Direction::None),
            (0, 1) => Ok(Direction::Up),
            (0, -1) => Ok(Direction::Down),
            (1, 0) => Ok(Direction::Right),
            (-1, 0) => Ok(Direction::Left),
            (-1, 1) => Ok(Direction::UpLeft),
            (1, 1) => Ok(Direction::UpRight),
            (-1, -1) => Ok(Direction::DownLeft),
            (1, -1) => Ok(Direction::DownRight),
            _ => Err(DirectionError::NotAStep { offset }),
        }
    }
}
