//! Grid addressing traits.
//!
//! [`GridRead`] and [`GridWrite`] are the seam between storage and
//! operators: the Laplacians, samplers and model right-hand sides accept any
//! grid-like value, so owned [`Grid`](crate::Grid)s and borrowed
//! [`GridView`](crate::GridView)s (including views of views) are
//! interchangeable.

use std::iter::FusedIterator;

/// Read access to a row-major 2D field.
///
/// # Contract
///
/// - `rows()` and `cols()` never change for the lifetime of the value.
/// - `at(row, col)` is defined for `row < rows()` and `col < cols()`.
///   Implementations are not required to check this in release builds;
///   out-of-range access may panic or alias another cell.
pub trait GridRead {
    /// Element type.
    type Elem;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> &Self::Elem;

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of cells.
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Iterate all cells in row-major order.
    fn cells(&self) -> RowMajor<'_, Self> {
        RowMajor::new(self)
    }
}

/// Write access to a row-major 2D field.
pub trait GridWrite: GridRead {
    /// Mutable element at `(row, col)`. Same range contract as
    /// [`GridRead::at`].
    fn at_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem;

    /// Overwrite every cell with `f(row, col)`, row by row.
    fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> Self::Elem,
    {
        let (rows, cols) = self.shape();
        for row in 0..rows {
            for col in 0..cols {
                *self.at_mut(row, col) = f(row, col);
            }
        }
    }
}

/// Row-major iterator over any [`GridRead`].
pub struct RowMajor<'a, G: ?Sized> {
    grid: &'a G,
    next: usize,
    len: usize,
    cols: usize,
}

impl<'a, G: GridRead + ?Sized> RowMajor<'a, G> {
    fn new(grid: &'a G) -> Self {
        Self {
            grid,
            next: 0,
            len: grid.size(),
            cols: grid.cols(),
        }
    }
}

impl<'a, G: GridRead + ?Sized> Iterator for RowMajor<'a, G> {
    type Item = &'a G::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let (row, col) = (self.next / self.cols, self.next % self.cols);
        self.next += 1;
        Some(self.grid.at(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<G: GridRead + ?Sized> ExactSizeIterator for RowMajor<'_, G> {}

impl<G: GridRead + ?Sized> FusedIterator for RowMajor<'_, G> {}
