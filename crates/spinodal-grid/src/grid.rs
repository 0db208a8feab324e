//! The owned, fixed-size [`Grid`] container.

use std::ops::{Index, IndexMut};

use spinodal_core::GridError;

use crate::traits::{GridRead, GridWrite};
use crate::view::{GridView, GridViewMut};

/// A two-dimensional field of `R × C` cells stored contiguously in
/// row-major order.
///
/// The extent is fixed at compile time and the grid is never resized.
/// `Grid` has sole ownership of its storage; cloning deep-copies it.
///
/// # Examples
///
/// ```
/// use spinodal_grid::{Grid, GridRead};
///
/// let mut g = Grid::<f64, 2, 3>::new();
/// assert_eq!(g.shape(), (2, 3));
/// assert!(g.iter().all(|&v| v == 0.0));
///
/// g[(1, 2)] = 5.0;
/// assert_eq!(g.as_slice()[2 + 1 * 3], 5.0);
/// assert_eq!(*g.at(1, 2), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, const R: usize, const C: usize> {
    data: Vec<T>,
}

impl<T, const R: usize, const C: usize> Grid<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;
    /// Number of cells, `R * C`.
    pub const SIZE: usize = R * C;

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major
    /// order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(Self::SIZE);
        for row in 0..R {
            for col in 0..C {
                data.push(f(row, col));
            }
        }
        Self { data }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`GridError::LengthMismatch`] if `data.len() != R * C`.
    pub fn from_vec(data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != Self::SIZE {
            return Err(GridError::LengthMismatch {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        C
    }

    /// Number of cells.
    pub const fn size(&self) -> usize {
        R * C
    }

    /// `(rows, cols)`.
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Linear index of `(row, col)`.
    #[inline]
    pub const fn index_of(row: usize, col: usize) -> usize {
        col + row * C
    }

    /// The backing storage in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable backing storage in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutably iterate cells in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * C..(row + 1) * C]
    }

    /// One row as a mutable contiguous slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * C..(row + 1) * C]
    }

    /// Read-only `VR × VC` window whose top-left corner is
    /// `(row_offset, col_offset)`.
    ///
    /// # Errors
    ///
    /// [`GridError::ViewOutOfBounds`] if the window does not fit.
    pub fn view<const VR: usize, const VC: usize>(
        &self,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<GridView<'_, Self, VR, VC>, GridError> {
        GridView::new(self, row_offset, col_offset)
    }

    /// Mutable `VR × VC` window whose top-left corner is
    /// `(row_offset, col_offset)`.
    ///
    /// # Errors
    ///
    /// [`GridError::ViewOutOfBounds`] if the window does not fit.
    pub fn view_mut<const VR: usize, const VC: usize>(
        &mut self,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<GridViewMut<'_, Self, VR, VC>, GridError> {
        GridViewMut::new(self, row_offset, col_offset)
    }

    /// The whole grid as a read-only view.
    pub fn as_view(&self) -> GridView<'_, Self, R, C> {
        GridView::whole(self)
    }
}

impl<T: Clone, const R: usize, const C: usize> Grid<T, R, C> {
    /// Grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: vec![value; R * C],
        }
    }

    /// Deep-copy a `R × C` window into fresh owned storage.
    ///
    /// The view's extent must equal the grid's; this is enforced by the
    /// type parameters.
    pub fn from_view<G>(view: &GridView<'_, G, R, C>) -> Self
    where
        G: GridRead<Elem = T> + ?Sized,
    {
        Self::from_fn(|row, col| view.at(row, col).clone())
    }
}

impl<T: Clone + Default, const R: usize, const C: usize> Grid<T, R, C> {
    /// Grid of `R * C` default (zero) elements.
    pub fn new() -> Self {
        Self::filled(T::default())
    }
}

impl<T: Clone + Default, const R: usize, const C: usize> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> GridRead for Grid<T, R, C> {
    type Elem = T;

    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < R && col < C, "({row}, {col}) outside {R}x{C} grid");
        &self.data[Self::index_of(row, col)]
    }
}

impl<T, const R: usize, const C: usize> GridWrite for Grid<T, R, C> {
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < R && col < C, "({row}, {col}) outside {R}x{C} grid");
        &mut self.data[Self::index_of(row, col)]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col)
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Grid<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Grid<T, R, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Grid<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for Grid<T, R, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T, G, const R: usize, const C: usize> From<GridView<'_, G, R, C>> for Grid<T, R, C>
where
    T: Clone,
    G: GridRead<Elem = T> + ?Sized,
{
    fn from(view: GridView<'_, G, R, C>) -> Self {
        Self::from_view(&view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn numbered<const R: usize, const C: usize>() -> Grid<f64, R, C> {
        Grid::from_fn(|r, c| (r * 100 + c) as f64)
    }

    #[test]
    fn default_is_zeroed_and_sized() {
        let g = Grid::<f64, 3, 5>::default();
        assert_eq!(g.size(), 15);
        assert_eq!(Grid::<f64, 3, 5>::SIZE, 15);
        assert_eq!(g.as_slice().len(), 15);
        assert!(g.iter().all(|&v| v == 0.0));

        let ints = Grid::<i32, 2, 2>::new();
        assert_eq!(ints.into_vec(), vec![0; 4]);
    }

    #[test]
    fn row_major_linear_index() {
        let g = numbered::<3, 4>();
        for r in 0..3 {
            for c in 0..4 {
                assert_eq!(g.as_slice()[c + r * 4], (r * 100 + c) as f64);
                assert_eq!(Grid::<f64, 3, 4>::index_of(r, c), c + r * 4);
            }
        }
        assert_eq!(g.row(2), &[200.0, 201.0, 202.0, 203.0]);
    }

    #[test]
    fn mutation_through_every_accessor() {
        let mut g = Grid::<f64, 2, 2>::new();
        g[(0, 1)] = 1.0;
        *g.at_mut(1, 0) = 2.0;
        g.row_mut(1)[1] = 3.0;
        for v in &mut g {
            *v += 10.0;
        }
        assert_eq!(g.as_slice(), &[10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::<u8, 2, 3>::from_vec(vec![0; 6]).is_ok());
        assert_eq!(
            Grid::<u8, 2, 3>::from_vec(vec![0; 5]),
            Err(GridError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn fill_with_overwrites_all_cells() {
        let mut g = Grid::<usize, 3, 3>::filled(7);
        g.fill_with(|r, c| r * 3 + c);
        assert_eq!(g.into_iter().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn whole_view_round_trips() {
        let g = numbered::<4, 3>();
        let copy = Grid::from(g.as_view());
        assert_eq!(copy, g);
    }

    #[test]
    fn view_of_non_copy_elements() {
        let g = Grid::<String, 2, 2>::from_fn(|r, c| format!("{r}{c}"));
        let window = g.view::<1, 2>(1, 0).unwrap();
        let owned = Grid::from_view(&window);
        assert_eq!(owned.as_slice(), &["10".to_string(), "11".to_string()]);
    }

    #[test]
    fn grid_satisfies_read_contract() {
        compliance::assert_row_major_cells(&numbered::<5, 7>());
        compliance::assert_row_major_cells(&Grid::<f64, 1, 1>::new());
        compliance::assert_row_major_cells(&Grid::<f64, 0, 3>::new());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn window_copy_reproduces_parent_region(ro in 0usize..=6, co in 0usize..=5) {
            let parent = numbered::<8, 8>();
            let view = parent.view::<2, 3>(ro, co).unwrap();
            let snapshot = Grid::from_view(&view);
            for r in 0..2 {
                for c in 0..3 {
                    prop_assert_eq!(snapshot[(r, c)], parent[(r + ro, c + co)]);
                }
            }
        }

        #[test]
        fn out_of_range_windows_are_rejected(ro in 0usize..12, co in 0usize..12) {
            let parent = numbered::<8, 8>();
            let result = parent.view::<4, 4>(ro, co);
            prop_assert_eq!(result.is_ok(), ro + 4 <= 8 && co + 4 <= 8);
        }
    }
}
