//! Breadth-first flood fill over the cell grid.

use std::fmt;

use micromouse_core::{BoundedQueue, Direction, Grid, Point, Range};

use crate::traits::Walls;

/// Sentinel distance for cells the last flood fill did not reach.
pub const UNKNOWN: i32 = i32::MAX;

/// Hop counts from every cell to the destination of the last flood fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    dist: Grid<i32>,
}

impl DistanceField {
    /// A field of `width × height` cells, all [`UNKNOWN`].
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            dist: Grid::new(width, height, UNKNOWN),
        }
    }

    #[inline]
    pub fn cells(&self) -> Range {
        self.dist.bounds()
    }

    /// Distance at `p`, or [`UNKNOWN`] if unreached or outside the field.
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        self.dist.at(p).unwrap_or(UNKNOWN)
    }

    /// Whether the last flood fill reached `p`.
    #[inline]
    pub fn is_known(&self, p: Point) -> bool {
        self.at(p) != UNKNOWN
    }

    fn reset(&mut self) {
        self.dist.fill(UNKNOWN);
    }
}

/// Diagnostic dump: one row per line, `?` for unknown cells.
impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.dist.height() {
            let Some(row) = self.dist.row(y) else {
                break;
            };
            for (x, &d) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                if d == UNKNOWN {
                    write!(f, "{:>3}", "?")?;
                } else {
                    write!(f, "{d:>3}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Recomputes a [`DistanceField`] from scratch on every call.
///
/// The frontier is a [`BoundedQueue`] of exactly `width · height` slots,
/// allocated once. Each cell is enqueued at most once, so the frontier can
/// never overflow.
#[derive(Debug, Clone)]
pub struct FloodFill {
    field: DistanceField,
    frontier: BoundedQueue<usize>,
    destination: Option<Point>,
}

impl FloodFill {
    pub fn new(width: i32, height: i32) -> Self {
        let field = DistanceField::new(width, height);
        let frontier = BoundedQueue::new(field.cells().len());
        Self {
            field,
            frontier,
            destination: None,
        }
    }

    /// The field computed by the last [`flood_fill`](Self::flood_fill).
    #[inline]
    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    /// Destination of the last flood fill, if any ran.
    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// Label every cell reachable from `destination` with its hop count,
    /// treating unknown walls as open. Returns the number of cells reached.
    ///
    /// A destination outside the grid leaves every cell unknown.
    pub fn flood_fill<W: Walls>(&mut self, walls: &W, destination: Point) -> usize {
        self.field.reset();
        self.frontier.clear();
        self.destination = Some(destination);

        let Some(start) = self.field.dist.index(destination) else {
            log::warn!("flood fill destination {destination} is outside the maze");
            return 0;
        };
        self.field.dist.set(destination, 0);
        self.enqueue(start);
        let mut reached = 1;

        while let Some(ci) = self.frontier.pop_front() {
            let cp = self.field.dist.point(ci);
            let next = self.field.at(cp) + 1;

            for dir in Direction::ALL {
                let np = cp + dir.offset();
                let Some(ni) = self.field.dist.index(np) else {
                    continue;
                };
                if self.field.is_known(np) || walls.is_wall_between(cp, np) {
                    continue;
                }
                self.field.dist.set(np, next);
                self.enqueue(ni);
                reached += 1;
            }
        }

        log::debug!("flood fill to {destination} reached {reached} cells");
        reached
    }

    fn enqueue(&mut self, idx: usize) {
        let accepted = self.frontier.push_back(idx);
        debug_assert!(accepted, "flood fill frontier overflow");
        if !accepted {
            log::warn!("flood fill frontier full, dropped cell {idx}");
        }
    }
}
