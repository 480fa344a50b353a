//! The session facade tying wall mapping, flood fill and move selection
//! together.

use micromouse_core::{Direction, Directions, Point, Vec2};

use crate::config::MazeConfig;
use crate::error::ConfigError;
use crate::flood::{DistanceField, FloodFill};
use crate::mapper::CoordinateMapper;
use crate::moves::MoveSelector;
use crate::walls::WallMap;

/// Navigation state for one run through one maze.
///
/// Owns the wall map, the distance field and the anti-backtrack memory.
/// Nothing here recomputes on its own: after marking walls the caller
/// decides when to call [`flood_fill`](Self::flood_fill).
///
/// All methods run to completion on the calling thread. Callers sharing a
/// solver between threads or interrupt handlers must serialize access.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    config: MazeConfig,
    mapper: CoordinateMapper,
    walls: WallMap,
    flood: FloodFill,
    selector: MoveSelector,
}

impl MazeSolver {
    /// Validate `config` and allocate every per-session buffer.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "new {}x{} maze solver, start {} destination {}",
            config.width,
            config.height,
            config.start,
            config.destination
        );
        Ok(Self {
            mapper: CoordinateMapper::from_config(&config),
            walls: WallMap::new(config.width, config.height),
            flood: FloodFill::new(config.width, config.height),
            selector: MoveSelector::new(),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[inline]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[inline]
    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    /// Distance field from the last flood fill.
    #[inline]
    pub fn distances(&self) -> &DistanceField {
        self.flood.field()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.config.start
    }

    #[inline]
    pub fn destination(&self) -> Point {
        self.config.destination
    }

    #[inline]
    pub fn is_at_destination(&self, cell: Point) -> bool {
        cell == self.config.destination
    }

    /// Nearest discrete cell to a continuous position estimate.
    #[inline]
    pub fn round_cell(&self, pos: Vec2) -> Point {
        self.mapper.round_cell(pos)
    }

    /// Record the wall a sensor at `pos` sees `distance` cm towards `dir`.
    /// Returns `true` if a new wall was learned.
    pub fn mark_wall(&mut self, pos: Vec2, distance: f64, dir: Direction) -> bool {
        self.walls.mark_wall(&self.mapper, pos, distance, dir)
    }

    /// Like [`mark_wall`](Self::mark_wall) with the heading as an angle in
    /// radians.
    pub fn mark_wall_at_angle(&mut self, pos: Vec2, distance: f64, angle: f64) -> bool {
        self.walls.mark_wall_at_angle(&self.mapper, pos, distance, angle)
    }

    /// Recompute the distance field towards `destination`. Returns the
    /// number of reachable cells.
    pub fn flood_fill(&mut self, destination: Point) -> usize {
        self.flood.flood_fill(&self.walls, destination)
    }

    /// Recompute the distance field towards the configured destination.
    pub fn flood_fill_destination(&mut self) -> usize {
        self.flood_fill(self.config.destination)
    }

    /// Directions out of `cell` not blocked by a known wall.
    pub fn possible_moves(&self, cell: Point) -> Directions {
        MoveSelector::possible_moves(&self.walls, cell)
    }

    /// Next cell to drive to from `cell`, or `None` if stuck.
    ///
    /// Uses and updates the remembered previous cell.
    pub fn next_move(&mut self, cell: Point) -> Option<Point> {
        self.selector.next_move(self.flood.field(), &self.walls, cell)
    }

    /// Next cell from `cell` given an explicit previous cell. Does not touch
    /// the remembered state.
    pub fn select_move(&self, cell: Point, came_from: Option<Point>) -> Option<Point> {
        MoveSelector::select(self.flood.field(), &self.walls, cell, came_from)
    }

    /// The cell left by the last move accepted through
    /// [`next_move`](Self::next_move).
    #[inline]
    pub fn previous_cell(&self) -> Option<Point> {
        self.selector.previous()
    }

    /// Forget the remembered previous cell.
    pub fn reset_moves(&mut self) {
        self.selector.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::UNKNOWN;

    fn solver(w: i32, h: i32, dest: Point) -> MazeSolver {
        let cfg = MazeConfig::default()
            .with_size(w, h)
            .with_destination(dest);
        MazeSolver::new(cfg).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = MazeConfig::default().with_size(40, 4);
        assert!(matches!(
            MazeSolver::new(cfg),
            Err(ConfigError::MazeSize { width: 40, .. })
        ));
    }

    #[test]
    fn fresh_solver_has_unknown_field() {
        let s = solver(3, 3, Point::new(2, 2));
        assert_eq!(s.distances().at(Point::new(0, 0)), UNKNOWN);
        assert_eq!(s.start(), Point::new(0, 0));
        assert!(s.is_at_destination(Point::new(2, 2)));
    }

    #[test]
    fn sensed_wall_reroutes() {
        let mut s = solver(3, 3, Point::new(2, 2));
        s.flood_fill_destination();
        assert_eq!(s.distances().at(Point::new(0, 0)), 4);

        // Wall directly north of (1,1), seen from (1,1).
        assert!(s.mark_wall(Vec2::new(1.0, 1.0), 10.0, Direction::North));
        // No recompute until asked.
        assert_eq!(s.distances().at(Point::new(1, 0)), 3);
        s.flood_fill_destination();
        assert_eq!(s.distances().at(Point::new(1, 0)), 3);
        assert!(!s.possible_moves(Point::new(1, 1)).has(Direction::North));
    }

    #[test]
    fn walks_open_maze_to_destination() {
        let mut s = solver(4, 4, Point::new(3, 3));
        s.flood_fill_destination();
        let mut cell = s.start();
        let mut steps = 0;
        while !s.is_at_destination(cell) {
            cell = s.next_move(cell).expect("open maze always has a move");
            steps += 1;
            assert!(steps <= 6);
        }
        assert_eq!(steps, 6);
    }

    #[test]
    fn select_move_is_stateless() {
        let mut s = solver(3, 1, Point::new(2, 0));
        s.flood_fill_destination();
        assert_eq!(s.select_move(Point::new(1, 0), Some(Point::new(2, 0))), Some(Point::new(2, 0)));
        assert_eq!(s.previous_cell(), None);
        assert_eq!(s.next_move(Point::new(0, 0)), Some(Point::new(1, 0)));
        assert_eq!(s.previous_cell(), Some(Point::new(0, 0)));
        s.reset_moves();
        assert_eq!(s.previous_cell(), None);
    }

    #[test]
    fn angle_marking_goes_through_mapper() {
        let mut s = solver(2, 1, Point::new(1, 0));
        // East of (0,0) at 0 rad.
        assert!(s.mark_wall_at_angle(Vec2::new(0.0, 0.0), 10.0, 0.0));
        s.flood_fill_destination();
        assert_eq!(s.distances().at(Point::new(0, 0)), UNKNOWN);
        assert_eq!(s.next_move(Point::new(0, 0)), None);
        assert_eq!(s.round_cell(Vec2::new(0.4, 0.6)), Point::new(0, 1));
    }
}
