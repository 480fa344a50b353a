use micromouse_core::{Direction, Directions, Point};

/// Wall knowledge between neighbouring cells.
///
/// Implemented by the online [`WallMap`](crate::WallMap) and by anything
/// else with a notion of walls (a simulated ground-truth maze, a test
/// fixture), so flood fill and move selection can run over either.
pub trait Walls {
    /// Whether a wall separates adjacent cells `a` and `b`.
    ///
    /// Non-adjacent pairs and pairs leaving the maze count as walled.
    fn is_wall_between(&self, a: Point, b: Point) -> bool;

    /// Directions out of `cell` not blocked by a known wall.
    fn open_directions(&self, cell: Point) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.is_wall_between(cell, cell + d.offset()))
            .collect()
    }
}
