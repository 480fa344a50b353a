//! Conversions between continuous cell positions, physical centimetre
//! offsets and the expanded wall grid.
//!
//! The expanded grid has twice the resolution of the cell grid plus one:
//! cell `(x, y)` has its centre at expanded `(2x + 1, 2y + 1)`, and the
//! wall between two neighbouring cells sits on the expanded coordinate in
//! between. A coordinate with at least one even axis is a wall site; both
//! even is a post (corner).
//!
//! None of these transforms check bounds. Inputs outside the maze produce
//! coordinates outside the maze.

use micromouse_core::{Point, Vec2};

use crate::config::MazeConfig;

/// Largest sensor error, in centimetres, that still snaps a reading onto
/// the intended wall site with the standard geometry.
///
/// Readings further off may land on a neighbouring site and corrupt the
/// wall map. This is not checked at runtime.
pub const WALL_TOLERANCE_CM: f64 = 4.7;

/// Stateless coordinate transforms for one maze geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    wall: f64,
    cell: Vec2,
}

impl CoordinateMapper {
    pub fn new(wall_thickness: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            wall: wall_thickness,
            cell: Vec2::new(cell_width, cell_height),
        }
    }

    pub fn from_config(cfg: &MazeConfig) -> Self {
        Self::new(cfg.wall_thickness, cfg.cell_width, cfg.cell_height)
    }

    /// Distance between the centres of two neighbouring cells, per axis.
    #[inline]
    pub fn pitch(&self) -> Vec2 {
        Vec2::new(self.cell.x + self.wall, self.cell.y + self.wall)
    }

    /// Centimetre offset of the cell-space position `pos`, measured from the
    /// outer corner of the maze.
    pub fn cell_to_cm(&self, pos: Vec2) -> Vec2 {
        let pitch = self.pitch();
        Vec2::new(
            pitch.x * pos.x + self.wall + self.cell.x / 2.0,
            pitch.y * pos.y + self.wall + self.cell.y / 2.0,
        )
    }

    /// Inverse of [`cell_to_cm`](Self::cell_to_cm).
    pub fn cm_to_cell(&self, cm: Vec2) -> Vec2 {
        let pitch = self.pitch();
        Vec2::new(
            (cm.x - self.wall - self.cell.x / 2.0) / pitch.x,
            (cm.y - self.wall - self.cell.y / 2.0) / pitch.y,
        )
    }

    /// Nearest expanded coordinate to a continuous cell position.
    pub fn cell_to_expanded(&self, pos: Vec2) -> Point {
        (pos * 2.0 + Vec2::new(1.0, 1.0)).round()
    }

    /// Cell-space position of an expanded coordinate.
    pub fn expanded_to_cell(&self, ex: Point) -> Vec2 {
        Vec2::new((ex.x as f64 - 1.0) / 2.0, (ex.y as f64 - 1.0) / 2.0)
    }

    /// Nearest discrete cell to a continuous position.
    #[inline]
    pub fn round_cell(&self, pos: Vec2) -> Point {
        pos.round()
    }

    /// Expanded coordinate of the wall seen `distance` centimetres from `pos`
    /// along the unit vector `heading`.
    pub fn sensed_site(&self, pos: Vec2, distance: f64, heading: Vec2) -> Point {
        let hit = self.cell_to_cm(pos) + heading * distance;
        self.cell_to_expanded(self.cm_to_cell(hit))
    }
}

/// Expanded coordinate of the centre of cell `p`.
#[inline]
pub const fn cell_center(p: Point) -> Point {
    Point::new(2 * p.x + 1, 2 * p.y + 1)
}

/// Expanded coordinate of the wall site shared by adjacent cells `a` and `b`.
#[inline]
pub const fn wall_between(a: Point, b: Point) -> Point {
    Point::new(a.x + b.x + 1, a.y + b.y + 1)
}
