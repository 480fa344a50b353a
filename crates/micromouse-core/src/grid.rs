//! An owned, fixed-size 2D grid.
//!
//! [`Grid`] stores its values in a flat row-major `Vec` with explicit width
//! and height. It never resizes after construction, and every access is
//! bounds-checked: reads outside the grid return `None`, writes are no-ops.

use crate::geom::{Point, Range};

/// A fixed-size 2D grid of `T` values with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Grid<T> {
    /// Create a new `width × height` grid filled with `value`.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, value: T) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Point for a flat index. The index must come from [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Get the value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the value at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> T) {
        for (i, v) in self.cells.iter_mut().enumerate() {
            let p = Point::new((i % self.width) as i32, (i / self.width) as i32);
            *v = f(p);
        }
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, v)| f(p, v)).count()
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// One row of the grid as a slice, or `None` if `y` is out of bounds.
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if y < 0 || y as usize >= self.height {
            return None;
        }
        let start = y as usize * self.width;
        Some(&self.cells[start..start + self.width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 0u8);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.len(), 50);
        assert_eq!(g.bounds(), Range::new(0, 0, 10, 5));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 0i32);
        let p = Point::new(2, 3);
        g.set(p, 42);
        assert_eq!(g.at(p), Some(42));
        assert_eq!(g.at(Point::new(0, 0)), Some(0));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn out_of_bounds_set_is_noop() {
        let mut g = Grid::new(2, 2, false);
        g.set(Point::new(2, 2), true);
        g.set(Point::new(-1, 1), true);
        assert_eq!(g.count_fn(|_, v| v), 0);
    }

    #[test]
    fn index_point_round_trip() {
        let g = Grid::new(7, 3, ());
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
    }

    #[test]
    fn fill_fn_and_rows() {
        let mut g = Grid::new(3, 2, 0i32);
        g.fill_fn(|p| p.x + 10 * p.y);
        assert_eq!(g.row(0), Some(&[0, 1, 2][..]));
        assert_eq!(g.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(g.row(2), None);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items[4], (Point::new(1, 1), 11));
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let g = Grid::new(-3, 4, 0u8);
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
    }
}
