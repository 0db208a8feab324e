//! Signed wavenumbers for the row axis of a half spectrum.

use spinodal_core::OperatorError;

/// Maps row position `r` of a spectrum with an even number of rows `R` to
/// its signed wavenumber in standard FFT ordering:
/// `0, 1, …, R/2, −(R/2 − 1), …, −1`.
///
/// The Nyquist row `R/2` is reported as `+R/2`; the Laplacian symbol only
/// uses its square.
///
/// ```
/// use spinodal_calculus::FrequencyTable;
///
/// let t = FrequencyTable::for_shape(8, 8).unwrap();
/// let ks: Vec<i64> = (0..8).map(|r| t.index(r)).collect();
/// assert_eq!(ks, [0, 1, 2, 3, 4, -3, -2, -1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    indices: Vec<i64>,
}

impl FrequencyTable {
    /// Table for a `rows × cols` grid.
    ///
    /// # Errors
    ///
    /// [`OperatorError::InvalidGridShape`] if `rows` is zero or odd.
    pub fn for_shape(rows: usize, cols: usize) -> Result<Self, OperatorError> {
        if rows == 0 || rows % 2 != 0 {
            return Err(OperatorError::InvalidGridShape {
                shape: (rows, cols),
                reason: "spectral operators need a non-zero, even row count",
            });
        }
        let half = rows / 2;
        let indices = (0..rows)
            .map(|r| {
                if r <= half {
                    r as i64
                } else {
                    -((rows - r) as i64)
                }
            })
            .collect();
        Ok(Self { indices })
    }

    /// Number of rows covered.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; empty tables are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Signed wavenumber of row `row`.
    #[inline]
    pub fn index(&self, row: usize) -> i64 {
        self.indices[row]
    }

    /// All wavenumbers in row order.
    pub fn as_slice(&self) -> &[i64] {
        &self.indices
    }
}
