//! Session configuration for a [`MazeSolver`](crate::MazeSolver).

use micromouse_core::{Point, Range};

use crate::error::ConfigError;

/// Largest supported maze side, in cells.
///
/// Every per-session buffer (wall map, distance field, flood-fill frontier)
/// is sized from the configured dimensions, which are capped here.
pub const MAX_MAZE_SIZE: i32 = 32;

/// Physical and logical description of a maze, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Wall thickness in centimetres.
    pub wall_thickness: f64,
    /// Inner cell width (x axis) in centimetres.
    pub cell_width: f64,
    /// Inner cell height (y axis) in centimetres.
    pub cell_height: f64,
    /// Maze width in cells.
    pub width: i32,
    /// Maze height in cells.
    pub height: i32,
    pub start: Point,
    pub destination: Point,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 1.0,
            cell_width: 20.0,
            cell_height: 20.0,
            width: 16,
            height: 16,
            start: Point::new(0, 0),
            destination: Point::new(8, 8),
        }
    }
}

impl MazeConfig {
    /// Set the maze dimensions in cells.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the physical dimensions in centimetres.
    pub fn with_geometry(mut self, wall_thickness: f64, cell_width: f64, cell_height: f64) -> Self {
        self.wall_thickness = wall_thickness;
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_destination(mut self, destination: Point) -> Self {
        self.destination = destination;
        self
    }

    /// The cell rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn cells(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Check every construction invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |n: i32| (1..=MAX_MAZE_SIZE).contains(&n);
        if !side_ok(self.width) || !side_ok(self.height) {
            return Err(ConfigError::MazeSize {
                width: self.width,
                height: self.height,
                max: MAX_MAZE_SIZE,
            });
        }
        if !self.wall_thickness.is_finite() || self.wall_thickness < 0.0 {
            return Err(ConfigError::InvalidLength {
                name: "wall thickness",
                value: self.wall_thickness,
            });
        }
        for (name, value) in [("cell width", self.cell_width), ("cell height", self.cell_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLength { name, value });
            }
        }
        let cells = self.cells();
        for (name, cell) in [("start", self.start), ("destination", self.destination)] {
            if !cells.contains(cell) {
                return Err(ConfigError::CellOutOfBounds { name, cell });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_oversized_maze() {
        let cfg = MazeConfig::default().with_size(33, 4);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::MazeSize {
                width: 33,
                height: 4,
                max: MAX_MAZE_SIZE
            })
        );
        assert!(MazeConfig::default().with_size(0, 4).validate().is_err());
        assert!(MazeConfig::default().with_size(32, 32).validate().is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        let cfg = MazeConfig::default().with_geometry(-1.0, 20.0, 20.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidLength { name: "wall thickness", .. })
        ));
        let cfg = MazeConfig::default().with_geometry(1.0, 20.0, 0.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidLength { name: "cell height", .. })
        ));
        let cfg = MazeConfig::default().with_geometry(0.0, f64::NAN, 20.0);
        assert!(cfg.validate().is_err());
        assert!(MazeConfig::default().with_geometry(0.0, 18.0, 18.0).validate().is_ok());
    }

    #[test]
    fn rejects_cells_outside_maze() {
        let cfg = MazeConfig::default()
            .with_size(4, 4)
            .with_destination(Point::new(4, 0));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::CellOutOfBounds {
                name: "destination",
                cell: Point::new(4, 0)
            })
        );
        let err = MazeConfig::default()
            .with_start(Point::new(-1, 0))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "start cell (-1, 0) is outside the maze");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = MazeConfig::default()
            .with_size(5, 7)
            .with_destination(Point::new(2, 3));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
