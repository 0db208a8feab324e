//! Real-to-complex 2D transforms over a fixed shape.
//!
//! Spectra use the half layout of a real-input transform: `rows` rows of
//! `cols / 2 + 1` complex bins, row-major. Neither direction normalises,
//! so a forward pass followed by an inverse pass scales the field by
//! `rows * cols`.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftNum, FftPlanner};
use spinodal_core::TransformError;

/// A planned forward/inverse real 2D transform for one grid shape.
pub trait RealFft2d<T> {
    /// Planned row count.
    fn rows(&self) -> usize;

    /// Planned column count.
    fn cols(&self) -> usize;

    /// Bins per spectrum row.
    fn half_cols(&self) -> usize {
        self.cols() / 2 + 1
    }

    /// Length of the half spectrum, `rows * (cols / 2 + 1)`.
    fn spectrum_len(&self) -> usize {
        self.rows() * self.half_cols()
    }

    /// Transform the row-major real field `input` into `spectrum`.
    fn forward(&mut self, input: &[T], spectrum: &mut [Complex<T>]) -> Result<(), TransformError>;

    /// Transform `spectrum` back into the row-major real field `output`.
    /// The contents of `spectrum` are unspecified afterwards.
    fn inverse(
        &mut self,
        spectrum: &mut [Complex<T>],
        output: &mut [T],
    ) -> Result<(), TransformError>;
}

fn check_len(buffer: &'static str, expected: usize, actual: usize) -> Result<(), TransformError> {
    if expected != actual {
        return Err(TransformError::BufferSize {
            buffer,
            expected,
            actual,
        });
    }
    Ok(())
}

/// [`RealFft2d`] backed by `rustfft`.
///
/// Forward: a complex FFT of every row, truncated to the non-redundant
/// half, then a complex FFT down every retained column. Inverse undoes the
/// columns, rebuilds each full row from Hermitian symmetry and keeps the
/// real part of the row inverse.
pub struct RustFft2d<T: FftNum> {
    rows: usize,
    cols: usize,
    row_fwd: Arc<dyn Fft<T>>,
    row_inv: Arc<dyn Fft<T>>,
    col_fwd: Arc<dyn Fft<T>>,
    col_inv: Arc<dyn Fft<T>>,
    row_buf: Vec<Complex<T>>,
    col_buf: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: FftNum> RustFft2d<T> {
    /// Plan transforms for a `rows × cols` field.
    ///
    /// # Errors
    ///
    /// [`TransformError::EmptyShape`] if either axis is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, TransformError> {
        if rows == 0 || cols == 0 {
            return Err(TransformError::EmptyShape {
                shape: (rows, cols),
            });
        }

        let mut planner = FftPlanner::<T>::new();
        let row_fwd = planner.plan_fft_forward(cols);
        let row_inv = planner.plan_fft_inverse(cols);
        let col_fwd = planner.plan_fft_forward(rows);
        let col_inv = planner.plan_fft_inverse(rows);

        let scratch_len = [&row_fwd, &row_inv, &col_fwd, &col_inv]
            .iter()
            .map(|f| f.get_inplace_scratch_len())
            .max()
            .unwrap_or(0);
        let zero = Complex::new(T::zero(), T::zero());

        log::debug!("planned {rows}x{cols} real fft (scratch {scratch_len})");

        Ok(Self {
            rows,
            cols,
            row_fwd,
            row_inv,
            col_fwd,
            col_inv,
            row_buf: vec![zero; cols],
            col_buf: vec![zero; rows],
            scratch: vec![zero; scratch_len],
        })
    }

    fn columns(&mut self, spectrum: &mut [Complex<T>], forward: bool) {
        let half = self.cols / 2 + 1;
        let fft = if forward { &self.col_fwd } else { &self.col_inv };
        for k in 0..half {
            for (r, slot) in self.col_buf.iter_mut().enumerate() {
                *slot = spectrum[r * half + k];
            }
            fft.process_with_scratch(&mut self.col_buf, &mut self.scratch);
            for (r, value) in self.col_buf.iter().enumerate() {
                spectrum[r * half + k] = *value;
            }
        }
    }
}

impl<T: FftNum> RealFft2d<T> for RustFft2d<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn forward(&mut self, input: &[T], spectrum: &mut [Complex<T>]) -> Result<(), TransformError> {
        let (rows, cols) = (self.rows, self.cols);
        let half = cols / 2 + 1;
        check_len("input", rows * cols, input.len())?;
        check_len("spectrum", rows * half, spectrum.len())?;

        for r in 0..rows {
            for (slot, &x) in self.row_buf.iter_mut().zip(&input[r * cols..(r + 1) * cols]) {
                *slot = Complex::new(x, T::zero());
            }
            self.row_fwd
                .process_with_scratch(&mut self.row_buf, &mut self.scratch);
            spectrum[r * half..(r + 1) * half].copy_from_slice(&self.row_buf[..half]);
        }
        self.columns(spectrum, true);
        Ok(())
    }

    fn inverse(
        &mut self,
        spectrum: &mut [Complex<T>],
        output: &mut [T],
    ) -> Result<(), TransformError> {
        let (rows, cols) = (self.rows, self.cols);
        let half = cols / 2 + 1;
        check_len("spectrum", rows * half, spectrum.len())?;
        check_len("output", rows * cols, output.len())?;

        self.columns(spectrum, false);
        for r in 0..rows {
            let bins = &spectrum[r * half..(r + 1) * half];
            self.row_buf[..half].copy_from_slice(bins);
            for k in half..cols {
                self.row_buf[k] = bins[cols - k].conj();
            }
            self.row_inv
                .process_with_scratch(&mut self.row_buf, &mut self.scratch);
            for (out, value) in output[r * cols..(r + 1) * cols].iter_mut().zip(&self.row_buf) {
                *out = value.re;
            }
        }
        Ok(())
    }
}

impl<T: FftNum> std::fmt::Debug for RustFft2d<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustFft2d")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}
