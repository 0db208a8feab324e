//! Periodic index arithmetic.
//!
//! All fields are treated as tori: stepping off one edge re-enters from
//! the opposite edge.

/// Map a signed coordinate onto `[0, len)` with periodic wrap.
///
/// `len` must be non-zero.
///
/// ```
/// use spinodal_grid::wrap_index;
///
/// assert_eq!(wrap_index(-1, 5), 4);
/// assert_eq!(wrap_index(7, 5), 2);
/// assert_eq!(wrap_index(-11, 5), 4);
/// ```
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap on an empty axis");
    index.rem_euclid(len as isize) as usize
}

/// `base + offset`, wrapped into `[0, len)`.
#[inline]
pub fn wrap_offset(base: usize, offset: isize, len: usize) -> usize {
    wrap_index(base as isize + offset, len)
}

/// For every position `i` in `[0, len)` and every entry `o` of `offsets`,
/// the wrapped neighbour `wrap(i + o)`, laid out as
/// `table[i * offsets.len() + k]`.
///
/// Built once per operator so the inner loops avoid modular arithmetic.
fn neighbour_table(len: usize, offsets: &[i64]) -> Vec<usize> {
    let mut table = Vec::with_capacity(len * offsets.len());
    for i in 0..len {
        for &o in offsets {
            table.push(wrap_offset(i, o as isize, len));
        }
    }
    table
}

/// Precomputed wrapped neighbours along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbours {
    width: usize,
    table: Vec<usize>,
}

impl Neighbours {
    /// Neighbour table for an axis of length `len` under `offsets`.
    pub fn new(len: usize, offsets: &[i64]) -> Self {
        Self {
            width: offsets.len(),
            table: neighbour_table(len, offsets),
        }
    }

    /// Axis length this table was built for.
    pub fn axis_len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.table.len() / self.width
        }
    }

    /// Wrapped neighbour indices of position `i`, one per offset.
    #[inline]
    pub fn of(&self, i: usize) -> &[usize] {
        &self.table[i * self.width..(i + 1) * self.width]
    }
}
