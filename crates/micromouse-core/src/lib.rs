//! **micromouse-core** — primitives shared by the micromouse crates.
//!
//! This crate provides geometry types, compass directions, a fixed-size
//! row-major grid and an allocation-free bounded deque. None of it knows
//! about mazes; the navigation logic lives in `micromouse-nav`.

pub mod direction;
pub mod geom;
pub mod grid;
pub mod queue;

pub use direction::{Direction, Directions};
pub use geom::{Point, Range, Vec2};
pub use grid::Grid;
pub use queue::BoundedQueue;
