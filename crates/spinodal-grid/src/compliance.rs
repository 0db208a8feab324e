//! Contract checks shared by the `GridRead` implementations' tests.

use std::fmt::Debug;

use crate::traits::GridRead;

/// `cells()` must visit `at(r, c)` in row-major order and report its length.
pub(crate) fn assert_row_major_cells<G>(grid: &G)
where
    G: GridRead + ?Sized,
    G::Elem: PartialEq + Debug,
{
    let (rows, cols) = grid.shape();
    assert_eq!(grid.size(), rows * cols);

    let cells = grid.cells();
    assert_eq!(cells.len(), rows * cols);

    for (i, cell) in cells.enumerate() {
        let (r, c) = (i / cols, i % cols);
        assert_eq!(cell, grid.at(r, c), "cell {i} != at({r}, {c})");
    }
}

/// Every cell of `window` must equal the parent cell at `offset` from it.
pub(crate) fn assert_window_matches<P, W>(parent: &P, window: &W, offset: (usize, usize))
where
    P: GridRead + ?Sized,
    W: GridRead<Elem = P::Elem> + ?Sized,
    P::Elem: PartialEq + Debug,
{
    for r in 0..window.rows() {
        for c in 0..window.cols() {
            assert_eq!(
                window.at(r, c),
                parent.at(r + offset.0, c + offset.1),
                "window ({r}, {c}) at offset {offset:?}"
            );
        }
    }
}
