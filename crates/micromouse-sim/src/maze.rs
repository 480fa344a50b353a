//! Ground-truth mazes with full wall knowledge.
//!
//! A [`Maze`] uses the same expanded-grid layout as the navigation
//! [`WallMap`](micromouse_nav::WallMap), but every wall is known up front.
//! It stands in for the physical maze: it answers simulated sensor queries
//! and can be used to check what the robot learned.

use std::fmt;

use micromouse_core::{Direction, Grid, Point, Range};
use micromouse_nav::{ConfigError, CoordinateMapper, MazeConfig, Walls, wall_between};
use rand::{Rng, RngExt};

/// A maze with every wall known.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    config: MazeConfig,
    sites: Grid<bool>,
}

impl Maze {
    /// A maze with the perimeter walled and every interior wall open.
    pub fn open(config: MazeConfig) -> Result<Self, ConfigError> {
        Self::with_interior(config, false)
    }

    /// A maze where every cell is walled off from its neighbours.
    pub fn closed(config: MazeConfig) -> Result<Self, ConfigError> {
        Self::with_interior(config, true)
    }

    fn with_interior(config: MazeConfig, walled: bool) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut sites = Grid::new(2 * config.width + 1, 2 * config.height + 1, false);
        let ex = sites.bounds();
        sites.fill_fn(|p| ex.on_border(p) || (walled && (p.x % 2 == 0 || p.y % 2 == 0)));
        Ok(Self { config, sites })
    }

    /// Carve a perfect maze (exactly one path between any two cells) with a
    /// randomised depth-first backtracker starting at the start cell.
    pub fn generate(config: MazeConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let mut maze = Self::closed(config)?;
        let cells = maze.cells();
        let mut visited = Grid::new(cells.width(), cells.height(), false);
        let mut stack = vec![config.start];
        visited.set(config.start, true);
        let mut options = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            options.clear();
            options.extend(
                Direction::ALL
                    .into_iter()
                    .map(|d| cur + d.offset())
                    .filter(|&n| visited.at(n) == Some(false)),
            );
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let next = options[rng.random_range(0..options.len())];
            maze.remove_wall(cur, next);
            visited.set(next, true);
            stack.push(next);
        }

        log::debug!("generated {}x{} maze", cells.width(), cells.height());
        Ok(maze)
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[inline]
    pub fn cells(&self) -> Range {
        self.config.cells()
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::from_config(&self.config)
    }

    /// Place a wall between adjacent interior cells `a` and `b`. Returns
    /// `false` if they are not adjacent cells of this maze.
    pub fn add_wall(&mut self, a: Point, b: Point) -> bool {
        self.set_wall(a, b, true)
    }

    /// Open the wall between adjacent cells `a` and `b`. Returns `false` if
    /// they are not adjacent cells of this maze.
    pub fn remove_wall(&mut self, a: Point, b: Point) -> bool {
        self.set_wall(a, b, false)
    }

    fn set_wall(&mut self, a: Point, b: Point, wall: bool) -> bool {
        let cells = self.cells();
        if !a.is_adjacent(b) || !cells.contains(a) || !cells.contains(b) {
            return false;
        }
        self.sites.set(wall_between(a, b), wall);
        true
    }

    /// Exact distance in centimetres from the centre of `cell` to the
    /// surface of the first wall towards `dir`.
    pub fn sense(&self, cell: Point, dir: Direction) -> f64 {
        let inner = match dir {
            Direction::North | Direction::South => self.config.cell_height,
            Direction::East | Direction::West => self.config.cell_width,
        };
        let step = dir.offset();
        let mut open = 0;
        let mut c = cell;
        while !self.is_wall_between(c, c + step) {
            c = c + step;
            open += 1;
        }
        inner / 2.0 + open as f64 * (inner + self.config.wall_thickness)
    }
}

impl Walls for Maze {
    fn is_wall_between(&self, a: Point, b: Point) -> bool {
        let cells = self.cells();
        if !a.is_adjacent(b) || !cells.contains(a) || !cells.contains(b) {
            return true;
        }
        self.sites.at(wall_between(a, b)).unwrap_or(true)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.sites.height() {
            for x in 0..self.sites.width() {
                let wall = self.sites.at(Point::new(x, y)).unwrap_or(false);
                let ch = match (x % 2 == 0, y % 2 == 0) {
                    (true, true) => '+',
                    (false, true) if wall => '-',
                    (true, false) if wall => '|',
                    _ => ' ',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
