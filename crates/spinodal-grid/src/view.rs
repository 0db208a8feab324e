//! Borrowed rectangular windows into a parent grid.
//!
//! A view never owns storage. Its lifetime is tied to the parent borrow, so
//! a view cannot outlive the grid it reads from, and a [`GridViewMut`]
//! excludes every other access to the parent while it is alive.

use std::fmt;

use spinodal_core::GridError;

use crate::grid::Grid;
use crate::traits::{GridRead, GridWrite};

fn check_window(
    view: (usize, usize),
    offset: (usize, usize),
    parent: (usize, usize),
) -> Result<(), GridError> {
    let fits = |off: usize, extent: usize, limit: usize| {
        off.checked_add(extent).is_some_and(|end| end <= limit)
    };
    if fits(offset.0, view.0, parent.0) && fits(offset.1, view.1, parent.1) {
        Ok(())
    } else {
        Err(GridError::ViewOutOfBounds {
            view,
            offset,
            parent,
        })
    }
}

/// Read-only `VR × VC` window into any [`GridRead`].
///
/// Cell `(r, c)` of the view is cell `(r + row_offset, c + col_offset)` of
/// the parent. Views compose: a view of a view reads through both offsets.
///
/// # Examples
///
/// ```
/// use spinodal_grid::{Grid, GridRead};
///
/// let g = Grid::<i32, 4, 4>::from_fn(|r, c| (r * 4 + c) as i32);
/// let inner = g.view::<2, 2>(1, 1).unwrap();
/// assert_eq!(*inner.at(0, 0), 5);
/// assert_eq!(*inner.at(1, 1), 10);
///
/// let corner = inner.view::<1, 1>(1, 0).unwrap();
/// assert_eq!(*corner.at(0, 0), 9);
/// ```
pub struct GridView<'a, G: GridRead + ?Sized, const VR: usize, const VC: usize> {
    parent: &'a G,
    row_offset: usize,
    col_offset: usize,
}

impl<'a, G: GridRead + ?Sized, const VR: usize, const VC: usize> GridView<'a, G, VR, VC> {
    /// Borrow a `VR × VC` window of `parent` starting at
    /// `(row_offset, col_offset)`.
    ///
    /// # Errors
    ///
    /// [`GridError::ViewOutOfBounds`] if the window extends past the
    /// parent's edge.
    pub fn new(parent: &'a G, row_offset: usize, col_offset: usize) -> Result<Self, GridError> {
        check_window((VR, VC), (row_offset, col_offset), parent.shape())?;
        Ok(Self {
            parent,
            row_offset,
            col_offset,
        })
    }

    /// `(row_offset, col_offset)` into the immediate parent.
    pub fn offset(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    /// Nested `NR × NC` window of this view.
    ///
    /// # Errors
    ///
    /// [`GridError::ViewOutOfBounds`] if the nested window does not fit.
    pub fn view<const NR: usize, const NC: usize>(
        &self,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<GridView<'_, Self, NR, NC>, GridError> {
        GridView::new(self, row_offset, col_offset)
    }

    /// Deep-copy the window into an owned grid.
    pub fn to_grid(&self) -> Grid<G::Elem, VR, VC>
    where
        G::Elem: Clone,
    {
        Grid::from_view(self)
    }
}

impl<'a, T, const R: usize, const C: usize> GridView<'a, Grid<T, R, C>, R, C> {
    pub(crate) fn whole(parent: &'a Grid<T, R, C>) -> Self {
        Self {
            parent,
            row_offset: 0,
            col_offset: 0,
        }
    }
}

impl<G: GridRead + ?Sized, const VR: usize, const VC: usize> GridRead for GridView<'_, G, VR, VC> {
    type Elem = G::Elem;

    fn rows(&self) -> usize {
        VR
    }

    fn cols(&self) -> usize {
        VC
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> &G::Elem {
        debug_assert!(row < VR && col < VC, "({row}, {col}) outside {VR}x{VC} view");
        self.parent.at(row + self.row_offset, col + self.col_offset)
    }
}

impl<G: GridRead + ?Sized, const VR: usize, const VC: usize> fmt::Debug
    for GridView<'_, G, VR, VC>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("shape", &(VR, VC))
            .field("offset", &self.offset())
            .field("parent_shape", &self.parent.shape())
            .finish()
    }
}

/// Mutable `VR × VC` window into any [`GridWrite`].
///
/// Writes go straight through to the parent's storage.
///
/// ```
/// use spinodal_grid::{Grid, GridWrite};
///
/// let mut g = Grid::<u8, 3, 3>::new();
/// g.view_mut::<2, 2>(1, 1).unwrap().fill(1);
/// assert_eq!(g.as_slice(), &[0, 0, 0, 0, 1, 1, 0, 1, 1]);
/// ```
pub struct GridViewMut<'a, G: GridWrite + ?Sized, const VR: usize, const VC: usize> {
    parent: &'a mut G,
    row_offset: usize,
    col_offset: usize,
}

impl<'a, G: GridWrite + ?Sized, const VR: usize, const VC: usize> GridViewMut<'a, G, VR, VC> {
    /// Mutably borrow a `VR × VC` window of `parent` starting at
    /// `(row_offset, col_offset)`.
    ///
    /// # Errors
    ///
    /// [`GridError::ViewOutOfBounds`] if the window extends past the
    /// parent's edge.
    pub fn new(
        parent: &'a mut G,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<Self, GridError> {
        check_window((VR, VC), (row_offset, col_offset), parent.shape())?;
        Ok(Self {
            parent,
            row_offset,
            col_offset,
        })
    }

    /// `(row_offset, col_offset)` into the parent.
    pub fn offset(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    /// Reborrow as a read-only view of the same window.
    pub fn as_view(&self) -> GridView<'_, G, VR, VC> {
        GridView {
            parent: &*self.parent,
            row_offset: self.row_offset,
            col_offset: self.col_offset,
        }
    }

    /// Set every cell of the window to `value`.
    pub fn fill(&mut self, value: G::Elem)
    where
        G::Elem: Clone,
    {
        self.fill_with(|_, _| value.clone());
    }

    /// Copy `source` cell by cell into the window.
    pub fn copy_from<S>(&mut self, source: &S)
    where
        S: GridRead<Elem = G::Elem> + ?Sized,
        G::Elem: Clone,
    {
        debug_assert_eq!(source.shape(), (VR, VC));
        self.fill_with(|row, col| source.at(row, col).clone());
    }
}

impl<G: GridWrite + ?Sized, const VR: usize, const VC: usize> GridRead
    for GridViewMut<'_, G, VR, VC>
{
    type Elem = G::Elem;

    fn rows(&self) -> usize {
        VR
    }

    fn cols(&self) -> usize {
        VC
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> &G::Elem {
        debug_assert!(row < VR && col < VC, "({row}, {col}) outside {VR}x{VC} view");
        self.parent.at(row + self.row_offset, col + self.col_offset)
    }
}

impl<G: GridWrite + ?Sized, const VR: usize, const VC: usize> GridWrite
    for GridViewMut<'_, G, VR, VC>
{
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut G::Elem {
        debug_assert!(row < VR && col < VC, "({row}, {col}) outside {VR}x{VC} view");
        self.parent
            .at_mut(row + self.row_offset, col + self.col_offset)
    }
}

impl<G: GridWrite + ?Sized, const VR: usize, const VC: usize> fmt::Debug
    for GridViewMut<'_, G, VR, VC>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridViewMut")
            .field("shape", &(VR, VC))
            .field("offset", &self.offset())
            .field("parent_shape", &self.parent.shape())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn numbered() -> Grid<i64, 6, 5> {
        Grid::from_fn(|r, c| (r * 10 + c) as i64)
    }

    #[test]
    fn view_reads_through_offset() {
        let g = numbered();
        let v = g.view::<3, 2>(2, 3).unwrap();
        assert_eq!(v.shape(), (3, 2));
        assert_eq!(v.offset(), (2, 3));
        assert_eq!(v.cells().copied().collect::<Vec<_>>(), vec![23, 24, 33, 34, 43, 44]);
        compliance::assert_row_major_cells(&v);
        compliance::assert_window_matches(&g, &v, (2, 3));
    }

    #[test]
    fn window_touching_far_corner_is_accepted() {
        let g = numbered();
        let v = g.view::<1, 1>(5, 4).unwrap();
        assert_eq!(*v.at(0, 0), 54);
        assert!(g.view::<6, 5>(0, 0).is_ok());
        assert!(g.view::<0, 0>(6, 5).is_ok());
    }

    #[test]
    fn out_of_bounds_reports_geometry() {
        let g = numbered();
        assert_eq!(
            g.view::<2, 2>(5, 0).unwrap_err(),
            GridError::ViewOutOfBounds {
                view: (2, 2),
                offset: (5, 0),
                parent: (6, 5),
            }
        );
        assert!(g.view::<2, 2>(0, 4).is_err());
        assert!(g.view::<7, 1>(0, 0).is_err());
        assert!(g.view::<1, 1>(usize::MAX, 0).is_err());
    }

    #[test]
    fn nested_views_compose_offsets() {
        let g = numbered();
        let outer = g.view::<4, 4>(1, 1).unwrap();
        let inner = outer.view::<2, 2>(1, 2).unwrap();
        compliance::assert_window_matches(&g, &inner, (2, 3));
        assert!(outer.view::<2, 2>(3, 0).is_err());
    }

    #[test]
    fn mutable_view_writes_parent() {
        let mut g = Grid::<i64, 4, 4>::new();
        {
            let mut v = g.view_mut::<2, 3>(1, 0).unwrap();
            v.fill_with(|r, c| (r * 3 + c) as i64 + 1);
            assert_eq!(*v.as_view().at(1, 2), 6);
            *v.at_mut(0, 0) = -1;
        }
        assert_eq!(
            g.as_slice(),
            &[0, 0, 0, 0, -1, 2, 3, 0, 4, 5, 6, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn mutable_view_copies_from_another_grid() {
        let mut g = Grid::<i64, 3, 3>::new();
        let patch = Grid::<i64, 2, 2>::from_vec(vec![1, 2, 3, 4]).unwrap();
        g.view_mut::<2, 2>(0, 1).unwrap().copy_from(&patch);
        assert_eq!(g.as_slice(), &[0, 1, 2, 0, 3, 4, 0, 0, 0]);
    }

    #[test]
    fn mutable_view_out_of_bounds() {
        let mut g = Grid::<f64, 2, 2>::new();
        assert!(g.view_mut::<2, 2>(1, 0).is_err());
        assert!(GridViewMut::<_, 1, 3>::new(&mut g, 0, 0).is_err());
    }

    #[test]
    fn debug_names_geometry() {
        let g = numbered();
        let v = g.view::<2, 2>(1, 3).unwrap();
        let s = format!("{v:?}");
        assert!(s.contains("offset: (1, 3)"), "{s}");
        assert!(s.contains("parent_shape: (6, 5)"), "{s}");
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn write_then_read_round_trip(
            ro in 0usize..=3,
            co in 0usize..=2,
            values in prop::collection::vec(-1e6f64..1e6, 9),
        ) {
            let mut g = Grid::<f64, 6, 5>::new();
            {
                let mut v = g.view_mut::<3, 3>(ro, co).unwrap();
                v.fill_with(|r, c| values[r * 3 + c]);
            }
            let read = g.view::<3, 3>(ro, co).unwrap();
            prop_assert_eq!(read.cells().copied().collect::<Vec<_>>(), values);

            let touched = g.iter().filter(|&&v| v != 0.0).count();
            prop_assert!(touched <= 9);
        }
    }
}
