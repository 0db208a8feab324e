//! Spectral Laplacian via a real 2D Fourier transform.

mod frequency;
mod transform;

pub use frequency::FrequencyTable;
pub use transform::{RealFft2d, RustFft2d};

use rustfft::num_complex::Complex;
use rustfft::FftNum;
use spinodal_core::{OperatorError, Real};
use spinodal_grid::{GridRead, GridWrite};

use crate::laplacian::{check_same_shape, LaplacianOperator};

/// Laplacian computed by multiplying the half spectrum by `−|k|²`.
///
/// The operator is planned for one shape; every call must use grids of
/// exactly that shape. Scratch buffers are owned by the operator, so
/// [`apply`](LaplacianOperator::apply) needs `&mut self` and one instance
/// should be used per thread.
///
/// ```
/// use spinodal_calculus::{LaplacianOperator, SpectralLaplacian};
/// use spinodal_grid::{fill_equispaced, Grid};
/// use std::f64::consts::TAU;
///
/// let mut phi = Grid::<f64, 16, 16>::new();
/// let (dx, dy) = fill_equispaced(&mut phi, (0.0, TAU), (0.0, TAU), |x, _| x.sin());
///
/// let mut op = SpectralLaplacian::<f64>::new(16, 16).unwrap();
/// let lap = op.laplacian_of(&phi, dx, dy).unwrap();
/// for (l, p) in lap.iter().zip(phi.iter()) {
///     assert!((l + p).abs() < 1e-10);
/// }
/// ```
pub struct SpectralLaplacian<T: FftNum, F = RustFft2d<T>> {
    transform: F,
    frequencies: FrequencyTable,
    real: Vec<T>,
    spectrum: Vec<Complex<T>>,
}

impl<T: Real + FftNum> SpectralLaplacian<T, RustFft2d<T>> {
    /// Plan a `rows × cols` operator on the bundled `rustfft` backend.
    ///
    /// # Errors
    ///
    /// [`OperatorError::InvalidGridShape`] if `rows` is zero or odd, or if
    /// `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, OperatorError> {
        FrequencyTable::for_shape(rows, cols)?;
        Self::with_transform(RustFft2d::new(rows, cols)?)
    }
}

impl<T: Real + FftNum, F: RealFft2d<T>> SpectralLaplacian<T, F> {
    /// Wrap an already-planned transform. The operator's shape is the
    /// transform's shape.
    ///
    /// # Errors
    ///
    /// [`OperatorError::InvalidGridShape`] if the transform's row count is
    /// zero or odd, or its column count is zero.
    pub fn with_transform(transform: F) -> Result<Self, OperatorError> {
        let (rows, cols) = (transform.rows(), transform.cols());
        let frequencies = FrequencyTable::for_shape(rows, cols)?;
        if cols == 0 {
            return Err(OperatorError::InvalidGridShape {
                shape: (rows, cols),
                reason: "spectral operators need at least one column",
            });
        }
        let spectrum_len = transform.spectrum_len();
        log::debug!("spectral laplacian: {rows}x{cols}, {spectrum_len} spectral bins");
        Ok(Self {
            transform,
            frequencies,
            real: vec![T::zero(); rows * cols],
            spectrum: vec![Complex::new(T::zero(), T::zero()); spectrum_len],
        })
    }

    /// `(rows, cols)` the operator was planned for.
    pub fn shape(&self) -> (usize, usize) {
        (self.transform.rows(), self.transform.cols())
    }

    /// Row wavenumbers used by the symbol.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    fn check_shape<G: GridRead + ?Sized>(&self, grid: &G) -> Result<(), OperatorError> {
        if grid.shape() != self.shape() {
            return Err(OperatorError::DimensionMismatch {
                expected: self.shape(),
                actual: grid.shape(),
            });
        }
        Ok(())
    }
}

/// Multiply every bin of a `rows × (cols/2 + 1)` half spectrum by the
/// Laplacian symbol `−(kx² + ky²)`, folding in the `1 / (rows·cols)`
/// normalisation of the round trip.
///
/// `kx = 2π·col / (cols·dx)` for `col ∈ [0, cols/2]` and
/// `ky = 2π·k_row / (rows·dy)` with `k_row` from `frequencies`.
pub fn apply_laplacian_symbol<T: Real + FftNum>(
    spectrum: &mut [Complex<T>],
    frequencies: &FrequencyTable,
    cols: usize,
    dx: T,
    dy: T,
) {
    let rows = frequencies.len();
    let half = cols / 2 + 1;
    debug_assert_eq!(spectrum.len(), rows * half);

    let norm = T::of_usize(rows * cols);
    let x_unit = T::TAU() / (T::of_usize(cols) * dx);
    let y_unit = T::TAU() / (T::of_usize(rows) * dy);

    for (row, bins) in spectrum.chunks_exact_mut(half).enumerate() {
        let ky = T::of_i64(frequencies.index(row)) * y_unit;
        for (col, bin) in bins.iter_mut().enumerate() {
            let kx = T::of_usize(col) * x_unit;
            let factor = -(kx * kx + ky * ky) / norm;
            bin.re = bin.re * factor;
            bin.im = bin.im * factor;
        }
    }
}

impl<T: Real + FftNum, F: RealFft2d<T>> LaplacianOperator<T> for SpectralLaplacian<T, F> {
    fn name(&self) -> &str {
        "spectral"
    }

    fn apply<I, O>(&mut self, phi: &I, dphi: &mut O, dx: T, dy: T) -> Result<(), OperatorError>
    where
        I: GridRead<Elem = T> + ?Sized,
        O: GridWrite<Elem = T> + ?Sized,
    {
        check_same_shape(phi, dphi)?;
        self.check_shape(phi)?;
        let cols = self.transform.cols();

        for (slot, value) in self.real.iter_mut().zip(phi.cells()) {
            *slot = *value;
        }
        self.transform.forward(&self.real, &mut self.spectrum)?;
        apply_laplacian_symbol(&mut self.spectrum, &self.frequencies, cols, dx, dy);
        self.transform.inverse(&mut self.spectrum, &mut self.real)?;

        let real = &self.real;
        dphi.fill_with(|row, col| real[col + row * cols]);
        Ok(())
    }
}

impl<T: FftNum, F: std::fmt::Debug> std::fmt::Debug for SpectralLaplacian<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectralLaplacian")
            .field("transform", &self.transform)
            .field("frequencies", &self.frequencies)
            .finish_non_exhaustive()
    }
}
