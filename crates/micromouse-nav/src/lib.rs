//! Online maze mapping and flood-fill navigation for micromouse robots.
//!
//! Given wall-distance sensor readings, this crate incrementally builds a
//! map of an unknown rectangular maze and computes the shortest known path
//! to a destination cell:
//!
//! - **Coordinate mapping** between continuous cell positions, centimetre
//!   offsets and the expanded wall grid ([`CoordinateMapper`])
//! - **Wall learning** from sensor readings ([`WallMap`])
//! - **Flood fill** BFS distance fields ([`FloodFill`], [`DistanceField`])
//! - **Move selection** with tie-breaking and anti-backtracking
//!   ([`MoveSelector`])
//!
//! [`MazeSolver`] owns one of each for a session.
//!
//! # Data flow
//!
//! | Step | Operation |
//! |---|---|
//! | sensor reading | [`MazeSolver::mark_wall`] |
//! | caller decides to recompute | [`MazeSolver::flood_fill`] |
//! | choose next cell | [`MazeSolver::next_move`] |

mod config;
mod error;
mod flood;
mod mapper;
mod moves;
mod solver;
mod traits;
mod walls;

pub use config::{MAX_MAZE_SIZE, MazeConfig};
pub use error::ConfigError;
pub use flood::{DistanceField, FloodFill, UNKNOWN};
pub use mapper::{CoordinateMapper, WALL_TOLERANCE_CM, cell_center, wall_between};
pub use moves::MoveSelector;
pub use solver::MazeSolver;
pub use traits::Walls;
pub use walls::WallMap;
