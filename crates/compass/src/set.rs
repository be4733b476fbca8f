//! Direction membership sets.

use bitflags::bitflags;

use crate::direction::Direction;

bitflags! {
    /// Set of compass directions, one bit per real direction.
    ///
    /// `Direction::None` has no bit; converting it yields the empty set and
    /// it is never a member.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct DirectionSet: u8 {
        const UP         = 1 << 0;
        const DOWN       = 1 << 1;
        const RIGHT      = 1 << 2;
        const LEFT       = 1 << 3;
        const UP_LEFT    = 1 << 4;
        const UP_RIGHT   = 1 << 5;
        const DOWN_LEFT  = 1 << 6;
        const DOWN_RIGHT = 1 << 7;
    }
}

impl DirectionSet {
    /// Returns true when the set holds `direction`.
    ///
    /// `Direction::None` is never a member, even of [`DirectionSet::all`].
    pub fn contains_direction(self, direction: Direction) -> bool {
        let bit = DirectionSet::from(direction);
        !bit.is_empty() && self.contains(bit)
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::None => DirectionSet::empty(),
            Direction::Up => DirectionSet::UP,
            Direction::Down => DirectionSet::DOWN,
            Direction::Right => DirectionSet::RIGHT,
            Direction::Left => DirectionSet::LEFT,
            Direction::UpLeft => DirectionSet::UP_LEFT,
            Direction::UpRight => DirectionSet::UP_RIGHT,
            Direction::DownLeft => DirectionSet::DOWN_LEFT,
            Direction::DownRight => DirectionSet::DOWN_RIGHT,
        }
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), |set, direction| {
                set | direction.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_from_directions() {
        let set: DirectionSet = [Direction::Up, Direction::Left, Direction::None]
            .into_iter()
            .collect();
        assert_eq!(set, DirectionSet::UP | DirectionSet::LEFT);
    }

    #[test]
    fn none_is_never_a_member() {
        assert!(!DirectionSet::all().contains_direction(Direction::None));
        assert!(!DirectionSet::empty().contains_direction(Direction::Down));
        assert!(DirectionSet::all().contains_direction(Direction::Down));
    }

    #[test]
    fn every_real_direction_has_a_distinct_bit() {
        let set: DirectionSet = Direction::ALL.into_iter().collect();
        assert_eq!(set, DirectionSet::all());
        for direction in Direction::ALL {
            assert_eq!(DirectionSet::from(direction).bits().count_ones(), 1);
        }
    }
}
