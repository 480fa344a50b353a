//! Next-cell selection over a distance field.

use micromouse_core::{Directions, Point};

use crate::flood::{DistanceField, UNKNOWN};
use crate::traits::Walls;

/// Picks the next cell to drive to, remembering where the robot came from.
///
/// Candidates are the open neighbours with a known distance. The lowest
/// distance wins, ties going to the first in North, South, East, West
/// order. The cell the robot just left is only chosen when it is strictly
/// closer than every other candidate, or when it is the only one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSelector {
    previous: Option<Point>,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell left by the last accepted move.
    #[inline]
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Forget the last accepted move.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Directions out of `cell` not blocked by a known wall.
    pub fn possible_moves<W: Walls>(walls: &W, cell: Point) -> Directions {
        walls.open_directions(cell)
    }

    /// Choose the next cell from `cell` given the cell the robot came from.
    ///
    /// Returns `None` when no open neighbour has a known distance: the robot
    /// is stuck or the destination is unreachable with current knowledge.
    pub fn select<W: Walls>(
        field: &DistanceField,
        walls: &W,
        cell: Point,
        came_from: Option<Point>,
    ) -> Option<Point> {
        let mut forward: Option<(Point, i32)> = None;
        let mut back: Option<(Point, i32)> = None;

        for dir in walls.open_directions(cell).iter() {
            let n = cell + dir.offset();
            let d = field.at(n);
            if d == UNKNOWN {
                continue;
            }
            if Some(n) == came_from {
                back = Some((n, d));
            } else if forward.is_none_or(|(_, best)| d < best) {
                forward = Some((n, d));
            }
        }

        match (forward, back) {
            (Some((_, fd)), Some((bp, bd))) if bd < fd => Some(bp),
            (Some((fp, _)), _) => Some(fp),
            (None, Some((bp, _))) => Some(bp),
            (None, None) => None,
        }
    }

    /// Choose the next cell and, if there is one, remember `cell` as the
    /// cell being left.
    pub fn next_move<W: Walls>(
        &mut self,
        field: &DistanceField,
        walls: &W,
        cell: Point,
    ) -> Option<Point> {
        let next = Self::select(field, walls, cell, self.previous);
        match next {
            Some(n) => {
                log::debug!("move {cell} -> {n} (distance {})", field.at(n));
                self.previous = Some(cell);
            }
            None => log::warn!("no move available from {cell}"),
        }
        next
    }
}
