//! Compass directions: [`Direction`] and the set type [`Directions`].
//!
//! The iteration order North, South, East, West is fixed. Move selection
//! breaks ties in this order, so it must not change.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::geom::{Point, Vec2};

/// One of the four axis-aligned compass directions.
///
/// North decreases y, West decreases x.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in tie-break order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset in cell space.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::South => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// Unit vector in continuous space.
    #[inline]
    pub fn unit(self) -> Vec2 {
        Vec2::from(self.offset())
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction whose offset is exactly `d`, if any.
    pub fn from_offset(d: Point) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.offset() == d)
    }

    /// Single-direction bit.
    #[inline]
    pub const fn bit(self) -> Directions {
        match self {
            Direction::North => Directions::NORTH,
            Direction::South => Directions::SOUTH,
            Direction::East => Directions::EAST,
            Direction::West => Directions::WEST,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// A set of [`Direction`]s packed into a bitmask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directions(pub u8);

impl Directions {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const SOUTH: Self = Self(1 << 1);
    pub const EAST: Self = Self(1 << 2);
    pub const WEST: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Whether this set contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether `dir` is in the set.
    #[inline]
    pub const fn has(self, dir: Direction) -> bool {
        self.contains(dir.bit())
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit().0;
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit().0;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in North, South, East, West order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }
}

impl From<Direction> for Directions {
    #[inline]
    fn from(d: Direction) -> Self {
        d.bit()
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Directions::NONE;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl BitOr for Directions {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Directions {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Directions {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Directions {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for d in self.iter() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_screen_axes() {
        assert_eq!(Direction::North.offset(), Point::new(0, -1));
        assert_eq!(Direction::West.offset(), Point::new(-1, 0));
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Point::ZERO);
            assert_eq!(Direction::from_offset(d.offset()), Some(d));
        }
        assert_eq!(Direction::from_offset(Point::new(1, 1)), None);
    }

    #[test]
    fn set_iteration_keeps_tie_break_order() {
        let set = Directions::WEST | Directions::NORTH | Directions::EAST;
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Direction::North, Direction::East, Direction::West]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "NEW");
    }

    #[test]
    fn insert_remove_complement() {
        let mut set = Directions::NONE;
        set.insert(Direction::South);
        set.insert(Direction::East);
        assert!(set.has(Direction::South));
        set.remove(Direction::South);
        assert!(!set.has(Direction::South));
        assert_eq!(!set, Directions::NORTH | Directions::SOUTH | Directions::WEST);
        assert_eq!(!Directions::ALL, Directions::NONE);
    }

    #[test]
    fn collect_from_iterator() {
        let set: Directions = [Direction::East, Direction::East, Direction::North]
            .into_iter()
            .collect();
        assert_eq!(set, Directions::NORTH | Directions::EAST);
    }
}
