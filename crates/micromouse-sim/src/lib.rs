//! A ground-truth maze simulator for exercising the navigation core.
//!
//! [`Maze`] holds the real walls and answers sensor queries. [`Explorer`]
//! drives a [`MazeSolver`](micromouse_nav::MazeSolver) through it: sense,
//! mark, recompute when something new was learned, move.
//!
//! ```
//! use micromouse_core::Point;
//! use micromouse_nav::MazeConfig;
//! use micromouse_sim::{Explorer, Maze, SimConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = MazeConfig::default()
//!     .with_size(8, 8)
//!     .with_destination(Point::new(4, 4));
//! let mut rng = StdRng::seed_from_u64(7);
//! let maze = Maze::generate(config, &mut rng).unwrap();
//! let mut explorer = Explorer::new(maze, SimConfig::default(), rng).unwrap();
//! assert!(explorer.run().reached);
//! ```

mod explorer;
mod maze;

pub use explorer::{ExploreReport, Explorer, SimConfig, StepOutcome};
pub use maze::Maze;
