//! Online wall map over the expanded coordinate grid.

use std::fmt;

use micromouse_core::{Direction, Grid, Point, Range, Vec2};

use crate::mapper::{self, CoordinateMapper};
use crate::traits::Walls;

/// Known walls of a `width × height` maze.
///
/// Storage covers the `(2·width + 1) × (2·height + 1)` expanded grid. The
/// perimeter is walled at construction and stays walled; interior sites
/// start open and are only ever switched on by [`mark`](Self::mark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMap {
    sites: Grid<bool>,
    cells: Range,
}

impl WallMap {
    /// Create a map of an unexplored `width × height` maze.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut sites = Grid::new(2 * width + 1, 2 * height + 1, false);
        let ex = sites.bounds();
        sites.fill_fn(|p| ex.on_border(p));
        Self {
            sites,
            cells: Range::new(0, 0, width, height),
        }
    }

    /// The cell rectangle covered by this map.
    #[inline]
    pub fn cells(&self) -> Range {
        self.cells
    }

    /// The expanded rectangle covered by this map.
    #[inline]
    pub fn expanded(&self) -> Range {
        self.sites.bounds()
    }

    /// Whether `ex` is inside the map and addressable as a wall (at least
    /// one even axis).
    #[inline]
    pub fn is_wall_site(&self, ex: Point) -> bool {
        self.sites.contains(ex) && (ex.x % 2 == 0 || ex.y % 2 == 0)
    }

    /// Wall bit at expanded coordinate `ex`. Anything outside the map reads
    /// as walled.
    #[inline]
    pub fn is_wall(&self, ex: Point) -> bool {
        self.sites.at(ex).unwrap_or(true)
    }

    /// Record a wall at expanded coordinate `ex`.
    ///
    /// Returns `true` only if this learned a new wall. Cell centres and
    /// coordinates outside the map are ignored.
    pub fn mark(&mut self, ex: Point) -> bool {
        if !self.is_wall_site(ex) {
            log::trace!("ignoring non-wall site {ex}");
            return false;
        }
        if self.is_wall(ex) {
            return false;
        }
        self.sites.set(ex, true);
        log::debug!("learned wall at {ex}");
        true
    }

    /// Record the wall seen by a sensor at cell position `pos`, reading
    /// `distance` centimetres towards `dir`.
    ///
    /// The reading must be within
    /// [`WALL_TOLERANCE_CM`](crate::WALL_TOLERANCE_CM) of the true distance
    /// to the wall surface, otherwise a neighbouring site may be marked.
    pub fn mark_wall(
        &mut self,
        mapper: &CoordinateMapper,
        pos: Vec2,
        distance: f64,
        dir: Direction,
    ) -> bool {
        self.mark_wall_towards(mapper, pos, distance, dir.unit())
    }

    /// Like [`mark_wall`](Self::mark_wall) with the sensor heading given as
    /// an angle in radians (`3π/2` is north).
    pub fn mark_wall_at_angle(
        &mut self,
        mapper: &CoordinateMapper,
        pos: Vec2,
        distance: f64,
        angle: f64,
    ) -> bool {
        self.mark_wall_towards(mapper, pos, distance, Vec2::from_angle(angle))
    }

    fn mark_wall_towards(
        &mut self,
        mapper: &CoordinateMapper,
        pos: Vec2,
        distance: f64,
        heading: Vec2,
    ) -> bool {
        let ex = mapper.sensed_site(pos, distance, heading);
        log::trace!("reading {distance:.1} cm from {pos} maps to {ex}");
        self.mark(ex)
    }

    /// Number of interior walls learned so far.
    pub fn learned(&self) -> usize {
        let ex = self.expanded();
        self.sites
            .count_fn(|p, wall| wall && !ex.on_border(p) && (p.x % 2 == 0) != (p.y % 2 == 0))
    }
}

impl Walls for WallMap {
    fn is_wall_between(&self, a: Point, b: Point) -> bool {
        if !a.is_adjacent(b) || !self.cells.contains(a) || !self.cells.contains(b) {
            return true;
        }
        self.is_wall(mapper::wall_between(a, b))
    }
}

/// Diagnostic dump: `+` posts, `-`/`|` walls, blanks for open sites.
impl fmt::Display for WallMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.sites.height() {
            for x in 0..self.sites.width() {
                let p = Point::new(x, y);
                let ch = match (x % 2 == 0, y % 2 == 0) {
                    (true, true) => '+',
                    (false, false) => ' ',
                    (false, true) if self.is_wall(p) => '-',
                    (true, false) if self.is_wall(p) => '|',
                    _ => ' ',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micromouse_core::Directions;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(1.0, 20.0, 20.0)
    }

    #[test]
    fn perimeter_walled_interior_open() {
        let w = WallMap::new(3, 2);
        assert_eq!(w.expanded(), Range::new(0, 0, 7, 5));
        for p in w.expanded() {
            assert_eq!(w.is_wall(p), w.expanded().on_border(p), "{p}");
        }
        assert_eq!(w.learned(), 0);
    }

    #[test]
    fn mark_is_idempotent() {
        let mut w = WallMap::new(3, 3);
        let pos = Vec2::new(1.0, 1.0);
        assert!(w.mark_wall(&mapper(), pos, 10.0, Direction::North));
        let after_first = w.clone();
        assert!(!w.mark_wall(&mapper(), pos, 10.0, Direction::North));
        assert_eq!(w, after_first);
        assert!(w.is_wall_between(Point::new(1, 1), Point::new(1, 0)));
        assert_eq!(w.learned(), 1);
    }

    #[test]
    fn perimeter_reading_changes_nothing() {
        let mut w = WallMap::new(3, 3);
        let before = w.clone();
        assert!(!w.mark_wall(&mapper(), Vec2::new(0.0, 0.0), 10.0, Direction::West));
        assert_eq!(w, before);
    }

    #[test]
    fn cell_centres_and_outside_are_not_marked() {
        let mut w = WallMap::new(3, 3);
        assert!(!w.mark(Point::new(3, 3)));
        assert!(!w.mark(Point::new(-2, 4)));
        assert!(!w.mark(Point::new(4, 100)));
        assert!(!w.is_wall(Point::new(3, 3)));
    }

    #[test]
    fn angle_reading_matches_direction_reading() {
        let mut by_dir = WallMap::new(4, 4);
        let mut by_angle = WallMap::new(4, 4);
        let pos = Vec2::new(2.0, 2.0);
        let angles = [
            (Direction::North, 1.5 * std::f64::consts::PI),
            (Direction::South, 0.5 * std::f64::consts::PI),
            (Direction::East, 0.0),
            (Direction::West, std::f64::consts::PI),
        ];
        for (dir, angle) in angles {
            by_dir.mark_wall(&mapper(), pos, 10.0, dir);
            by_angle.mark_wall_at_angle(&mapper(), pos, 10.0, angle);
        }
        assert_eq!(by_dir, by_angle);
        assert_eq!(by_dir.open_directions(Point::new(2, 2)), Directions::NONE);
    }

    #[test]
    fn far_reading_marks_distant_wall() {
        let mut w = WallMap::new(5, 1);
        // Open corridor of two cells, then the east wall of cell (3, 0).
        assert!(w.mark_wall(&mapper(), Vec2::new(1.0, 0.0), 10.0 + 2.0 * 21.0, Direction::East));
        assert!(w.is_wall_between(Point::new(3, 0), Point::new(4, 0)));
        assert!(!w.is_wall_between(Point::new(1, 0), Point::new(2, 0)));
    }

    #[test]
    fn non_adjacent_or_outside_counts_as_walled() {
        let w = WallMap::new(3, 3);
        assert!(w.is_wall_between(Point::new(0, 0), Point::new(1, 1)));
        assert!(w.is_wall_between(Point::new(0, 0), Point::new(-1, 0)));
        assert!(!w.is_wall_between(Point::new(0, 0), Point::new(1, 0)));
        assert_eq!(
            w.open_directions(Point::new(0, 0)),
            Directions::SOUTH | Directions::EAST
        );
    }

    #[test]
    fn dump_shows_walls() {
        let mut w = WallMap::new(2, 1);
        w.mark(Point::new(2, 1));
        assert_eq!(w.to_string(), "+-+-+\n| | |\n+-+-+\n");
    }
}
