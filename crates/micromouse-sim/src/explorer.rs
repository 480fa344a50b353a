//! Drive a [`MazeSolver`] through a simulated [`Maze`].
//!
//! Each step the explorer reads all four wall sensors at the robot's cell,
//! feeds them to the solver, recomputes the flood fill when something new
//! was learned, then moves to the cell the solver picks.

use micromouse_core::{Direction, Point, Vec2};
use micromouse_nav::{ConfigError, MazeSolver, Walls};
use rand::{Rng, RngExt};

use crate::maze::Maze;

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Half-width in cm of the uniform noise added to each sensor reading.
    /// Keep below [`WALL_TOLERANCE_CM`](micromouse_nav::WALL_TOLERANCE_CM).
    pub noise_cm: f64,
    /// Give up after this many moves.
    pub max_steps: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            noise_cm: 0.0,
            max_steps: 10_000,
        }
    }
}

/// Result of a single [`Explorer::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The robot drove from one cell to the next.
    Moved { from: Point, to: Point },
    /// The robot is on the destination cell.
    Arrived,
    /// The solver found no move.
    Stuck,
    /// The solver picked a move through a real wall it had not mapped.
    Blocked { from: Point, to: Point },
}

/// Summary of an [`Explorer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreReport {
    pub reached: bool,
    pub moves: usize,
    pub recomputes: usize,
    /// Every cell visited, starting with the start cell.
    pub path: Vec<Point>,
}

/// A simulated robot exploring a [`Maze`].
pub struct Explorer<R: Rng> {
    maze: Maze,
    solver: MazeSolver,
    sim: SimConfig,
    rng: R,
    position: Point,
    moves: usize,
    recomputes: usize,
    path: Vec<Point>,
}

impl<R: Rng> Explorer<R> {
    /// Place a robot on the maze's start cell with an empty wall map.
    pub fn new(maze: Maze, sim: SimConfig, rng: R) -> Result<Self, ConfigError> {
        let solver = MazeSolver::new(*maze.config())?;
        let position = solver.start();
        Ok(Self {
            maze,
            solver,
            sim,
            rng,
            position,
            moves: 0,
            recomputes: 0,
            path: vec![position],
        })
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn solver(&self) -> &MazeSolver {
        &self.solver
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    fn read_sensor(&mut self, dir: Direction) -> f64 {
        let exact = self.maze.sense(self.position, dir);
        if self.sim.noise_cm > 0.0 {
            exact + self.rng.random_range(-self.sim.noise_cm..=self.sim.noise_cm)
        } else {
            exact
        }
    }

    /// Sense, update the map, and take one move.
    pub fn step(&mut self) -> StepOutcome {
        if self.solver.is_at_destination(self.position) {
            return StepOutcome::Arrived;
        }

        let here = Vec2::from(self.position);
        let mut learned = false;
        for dir in Direction::ALL {
            let reading = self.read_sensor(dir);
            learned |= self.solver.mark_wall(here, reading, dir);
        }
        if learned || self.recomputes == 0 {
            self.solver.flood_fill_destination();
            self.recomputes += 1;
        }

        let from = self.position;
        let Some(to) = self.solver.next_move(from) else {
            return StepOutcome::Stuck;
        };
        if self.maze.is_wall_between(from, to) {
            log::warn!("solver drove into an unmapped wall between {from} and {to}");
            return StepOutcome::Blocked { from, to };
        }
        self.position = to;
        self.moves += 1;
        self.path.push(to);
        StepOutcome::Moved { from, to }
    }

    /// Step until arrival, a failure, or the step budget runs out.
    pub fn run(&mut self) -> ExploreReport {
        for _ in 0..self.sim.max_steps {
            match self.step() {
                StepOutcome::Moved { .. } => continue,
                StepOutcome::Arrived | StepOutcome::Stuck | StepOutcome::Blocked { .. } => break,
            }
        }
        let reached = self.solver.is_at_destination(self.position);
        if reached {
            log::info!(
                "reached {} in {} moves ({} recomputes)",
                self.position,
                self.moves,
                self.recomputes
            );
        } else {
            log::info!("gave up at {} after {} moves", self.position, self.moves);
        }
        ExploreReport {
            reached,
            moves: self.moves,
            recomputes: self.recomputes,
            path: self.path.clone(),
        }
    }
}
