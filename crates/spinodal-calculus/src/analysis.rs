//! Error norms and least-squares fits for convergence studies.
//!
//! Every function returns `None` rather than a meaningless number when its
//! inputs are empty, of unequal length, or degenerate.

use spinodal_core::Real;

/// Least-squares line `y = intercept + gradient · x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit<T> {
    /// Value at `x = 0`.
    pub intercept: T,
    /// Slope.
    pub gradient: T,
}

impl<T: Real> LinearFit<T> {
    /// Evaluate the fitted line at `x`.
    pub fn at(&self, x: T) -> T {
        self.intercept + self.gradient * x
    }
}

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// `None` if the lengths differ, fewer than two points are given, or all
/// `xs` are equal.
///
/// ```
/// use spinodal_calculus::analysis::linear_fit;
///
/// let fit = linear_fit::<f64>(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert!((fit.gradient - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn linear_fit<T: Real>(xs: &[T], ys: &[T]) -> Option<LinearFit<T>> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = T::of_usize(xs.len());
    let mean_x = xs.iter().copied().sum::<T>() / n;
    let mean_y = ys.iter().copied().sum::<T>() / n;

    let mut sxx = T::zero();
    let mut sxy = T::zero();
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if sxx == T::zero() {
        return None;
    }
    let gradient = sxy / sxx;
    Some(LinearFit {
        intercept: mean_y - gradient * mean_x,
        gradient,
    })
}

/// `max |a_i − b_i|`.
pub fn max_abs_error<T: Real>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .map(|(&x, &y)| (x - y).abs())
            .fold(T::zero(), |acc, e| acc.max(e)),
    )
}

/// `Σ (a_i − b_i)²`.
pub fn sum_squared_error<T: Real>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    Some(a.iter().zip(b).map(|(&x, &y)| (x - y) * (x - y)).sum())
}

/// Empirical order of accuracy: the slope of `ln(error)` against
/// `ln(spacing)`.
///
/// `None` if the inputs cannot be fitted or any value is not strictly
/// positive.
///
/// ```
/// use spinodal_calculus::analysis::convergence_order;
///
/// let h = [0.1, 0.05, 0.025];
/// let err: Vec<f64> = h.iter().map(|h| 3.0 * h * h).collect();
/// let p = convergence_order(&h, &err).unwrap();
/// assert!((p - 2.0).abs() < 1e-9);
/// ```
pub fn convergence_order<T: Real>(spacings: &[T], errors: &[T]) -> Option<T> {
    let positive = |v: &[T]| v.iter().all(|&x| x > T::zero());
    if !positive(spacings) || !positive(errors) {
        return None;
    }
    let log_h: Vec<T> = spacings.iter().map(|h| h.ln()).collect();
    let log_e: Vec<T> = errors.iter().map(|e| e.ln()).collect();
    linear_fit(&log_h, &log_e).map(|fit| fit.gradient)
}
